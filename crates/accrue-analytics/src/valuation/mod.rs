//! Present value of cash-flow series and simple annuities.
//!
//! Two discounting models are provided:
//!
//! - **Dated**: each flow is discounted by the year fraction between the anchor date
//!   and its own date, `amount_i / (1 + rate)^yf(d_0, d_i)`. This is the objective of
//!   XIRR and the definition of XNPV.
//! - **Periodic**: dates are ignored and the `j`-th flow is discounted by `j` whole
//!   periods, `amount_j / (1 + rate)^j`. This is the objective of IRR and the
//!   definition of NPV.
//!
//! The closed-form annuity functions live in [`annuity`].

pub mod annuity;

pub use annuity::{
    capital_recovery_factor, future_value, level_payment, present_value, return_coefficient,
    PaymentTiming,
};

use accrue_core::daycounts::{Act365Fixed, DayCount};
use accrue_core::CashFlowSeries;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Dated value of `series` at an annual `rate`.
///
/// The anchor flow contributes its amount unscaled; every later flow is discounted
/// by `(1 + rate)` raised to its year fraction from the anchor date. Returns `0.0`
/// for an empty series.
///
/// The result is not checked: a rate of `-1` or below yields infinities or NaN,
/// which the rate solvers treat as a failed attempt.
#[must_use]
pub fn value_at_rate(series: &CashFlowSeries, rate: f64, day_count: &dyn DayCount) -> f64 {
    let Some(anchor) = series.try_first() else {
        return 0.0;
    };
    let base = 1.0 + rate;

    series.iter().skip(1).fold(anchor.amount(), |acc, cf| {
        let t = day_count.year_fraction(anchor.date(), cf.date());
        acc + cf.amount() / base.powf(t)
    })
}

/// First derivative of [`value_at_rate`] with respect to the rate.
///
/// `-sum(t_i * amount_i / (1 + rate)^(t_i + 1))` over every flow after the anchor.
#[must_use]
pub fn value_derivative_at_rate(
    series: &CashFlowSeries,
    rate: f64,
    day_count: &dyn DayCount,
) -> f64 {
    let Some(anchor) = series.try_first() else {
        return 0.0;
    };
    let base = 1.0 + rate;

    series.iter().skip(1).fold(0.0, |acc, cf| {
        let t = day_count.year_fraction(anchor.date(), cf.date());
        acc - t * cf.amount() / base.powf(t + 1.0)
    })
}

/// Periodic value of `series` at a per-period `rate`, ignoring dates.
///
/// The flow at index `j` is discounted by `(1 + rate)^j`, so the anchor flow is
/// never discounted.
#[must_use]
pub fn periodic_value_at_rate(series: &CashFlowSeries, rate: f64) -> f64 {
    let base = 1.0 + rate;

    series
        .iter()
        .enumerate()
        .fold(0.0, |acc, (j, cf)| acc + cf.amount() / base.powf(j as f64))
}

/// Net present value of dated flows at an annual `rate` (Actual/365 Fixed).
///
/// # Errors
///
/// Returns `AnalyticsError::InsufficientCashFlows` for fewer than two entries.
///
/// # Example
///
/// ```rust
/// use accrue_analytics::valuation::xnpv;
/// use accrue_core::{CashFlow, CashFlowSeries, Date};
///
/// let series = CashFlowSeries::new(vec![
///     CashFlow::new(Date::from_ymd(2024, 1, 1).unwrap(), -100.0),
///     CashFlow::new(Date::from_ymd(2024, 12, 31).unwrap(), 110.0),
/// ]);
/// let value = xnpv(0.10, &series).unwrap();
/// assert!(value.abs() < 1e-9);
/// ```
pub fn xnpv(rate: f64, series: &CashFlowSeries) -> AnalyticsResult<f64> {
    xnpv_with(rate, series, &Act365Fixed)
}

/// Net present value of dated flows under an explicit day count.
///
/// # Errors
///
/// Returns `AnalyticsError::InsufficientCashFlows` for fewer than two entries.
pub fn xnpv_with(
    rate: f64,
    series: &CashFlowSeries,
    day_count: &dyn DayCount,
) -> AnalyticsResult<f64> {
    if series.len() < 2 {
        return Err(AnalyticsError::insufficient_cash_flows(2, series.len()));
    }
    Ok(value_at_rate(series, rate, day_count))
}

/// Net present value of periodic flows at a per-period `rate`.
///
/// # Errors
///
/// Returns `AnalyticsError::InsufficientCashFlows` for an empty series.
pub fn npv(rate: f64, series: &CashFlowSeries) -> AnalyticsResult<f64> {
    if series.is_empty() {
        return Err(AnalyticsError::insufficient_cash_flows(1, 0));
    }
    Ok(periodic_value_at_rate(series, rate))
}
