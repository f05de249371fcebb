//! Closed-form annuity functions.
//!
//! All functions follow the spreadsheet sign convention: money paid out is
//! negative, money received is positive. A loan of `10_000` (received, positive
//! present value) is repaid by negative payments.
//!
//! Every formula has an explicit `rate == 0` branch where the compounding terms
//! degenerate to simple sums.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// When payments fall within each period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentTiming {
    /// Payment at the end of each period (ordinary annuity, flag `0`).
    #[default]
    EndOfPeriod,
    /// Payment at the beginning of each period (annuity-due, flag `1`).
    BeginningOfPeriod,
}

impl PaymentTiming {
    /// Returns the integer flag: `0` for end of period, `1` for beginning.
    #[must_use]
    pub fn flag(self) -> i64 {
        match self {
            Self::EndOfPeriod => 0,
            Self::BeginningOfPeriod => 1,
        }
    }

    /// Returns true for an annuity-due.
    #[must_use]
    pub fn is_due(self) -> bool {
        self == Self::BeginningOfPeriod
    }

    fn factor(self) -> f64 {
        match self {
            Self::EndOfPeriod => 0.0,
            Self::BeginningOfPeriod => 1.0,
        }
    }
}

impl TryFrom<i64> for PaymentTiming {
    type Error = AnalyticsError;

    fn try_from(flag: i64) -> Result<Self, Self::Error> {
        match flag {
            0 => Ok(Self::EndOfPeriod),
            1 => Ok(Self::BeginningOfPeriod),
            other => Err(AnalyticsError::invalid_parameters(format!(
                "payment timing flag must be 0 or 1, got {other}"
            ))),
        }
    }
}

impl fmt::Display for PaymentTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfPeriod => write!(f, "end of period"),
            Self::BeginningOfPeriod => write!(f, "beginning of period"),
        }
    }
}

/// Present value of a level annuity plus a terminal amount.
///
/// With `c = (1 + rate)^periods`:
///
/// `PV = (((1 - c) / rate) * payment * (1 + rate * t) - future_value) / c`
///
/// where `t` is `1` for an annuity-due and `0` otherwise. At `rate == 0` this
/// reduces to `-payment * periods - future_value`.
#[must_use]
pub fn present_value(
    rate: f64,
    periods: u32,
    payment: f64,
    future_value: f64,
    timing: PaymentTiming,
) -> f64 {
    let n = f64::from(periods);
    if rate == 0.0 {
        return -payment * n - future_value;
    }

    let c = (1.0 + rate).powf(n);
    (((1.0 - c) / rate) * payment * (1.0 + rate * timing.factor()) - future_value) / c
}

/// Future value of a level annuity plus an initial amount.
///
/// With `c = (1 + rate)^periods`:
///
/// `FV = -present_value * c - payment * (1 + rate * t) * (c - 1) / rate`
///
/// At `rate == 0` this reduces to `-present_value - payment * periods`.
#[must_use]
pub fn future_value(
    rate: f64,
    periods: u32,
    payment: f64,
    present_value: f64,
    timing: PaymentTiming,
) -> f64 {
    let n = f64::from(periods);
    if rate == 0.0 {
        return -present_value - payment * n;
    }

    let c = (1.0 + rate).powf(n);
    -present_value * c - payment * (1.0 + rate * timing.factor()) * (c - 1.0) / rate
}

/// Level payment that amortizes `present_value` down to `future_value`.
///
/// With `term = (1 + rate)^periods`, the ordinary payment is
/// `-(future_value * rate / (term - 1) + present_value * rate / (1 - 1 / term))`;
/// an annuity-due divides it by `1 + rate`. At `rate == 0` the payment is
/// `-(present_value + future_value) / periods`.
///
/// # Errors
///
/// Returns `AnalyticsError::InvalidParameters` if `periods` is zero or the payment
/// comes out exactly zero.
///
/// # Example
///
/// ```rust
/// use accrue_analytics::valuation::{level_payment, PaymentTiming};
///
/// let pmt = level_payment(0.05, 36, 10_000.0, 500.0, PaymentTiming::BeginningOfPeriod).unwrap();
/// assert!((pmt - -580.54).abs() < 0.01);
/// ```
pub fn level_payment(
    rate: f64,
    periods: u32,
    present_value: f64,
    future_value: f64,
    timing: PaymentTiming,
) -> AnalyticsResult<f64> {
    if periods == 0 {
        return Err(AnalyticsError::invalid_parameters(
            "level payment needs at least one period",
        ));
    }

    let n = f64::from(periods);
    let payment = if rate == 0.0 {
        -(present_value + future_value) / n
    } else {
        let term = (1.0 + rate).powf(n);
        let ordinary =
            -(future_value * rate / (term - 1.0) + present_value * rate / (1.0 - 1.0 / term));
        if timing.is_due() {
            ordinary / (1.0 + rate)
        } else {
            ordinary
        }
    };

    if payment == 0.0 {
        return Err(AnalyticsError::invalid_parameters(format!(
            "level payment is zero for present value {present_value} and future value {future_value}"
        )));
    }

    Ok(payment)
}

/// Capital recovery factor: the level payment per unit of principal.
///
/// `rate * (1 + rate)^periods / ((1 + rate)^periods - 1)`, and `1 / periods` at
/// `rate == 0`.
///
/// # Errors
///
/// Returns `AnalyticsError::InvalidParameters` if `periods` is zero.
pub fn capital_recovery_factor(rate: f64, periods: u32) -> AnalyticsResult<f64> {
    if periods == 0 {
        return Err(AnalyticsError::invalid_parameters(
            "capital recovery factor needs at least one period",
        ));
    }

    let n = f64::from(periods);
    if rate == 0.0 {
        return Ok(1.0 / n);
    }

    let term = (1.0 + rate).powf(n);
    Ok(rate * term / (term - 1.0))
}

/// Ratio of a principal to its monthly level payment.
///
/// `present_value / level_payment(annual_rate / 12, periods, present_value,
/// future_value, timing)`. The annual rate is converted to a monthly rate before
/// the payment is computed.
///
/// # Panics
///
/// Panics if the level payment is undefined, that is if `periods` is zero or the
/// payment is exactly zero. Both make the ratio meaningless.
#[must_use]
pub fn return_coefficient(
    annual_rate: f64,
    periods: u32,
    present_value: f64,
    future_value: f64,
    timing: PaymentTiming,
) -> f64 {
    match level_payment(annual_rate / 12.0, periods, present_value, future_value, timing) {
        Ok(payment) => present_value / payment,
        Err(err) => panic!("return coefficient is undefined: {err}"),
    }
}
