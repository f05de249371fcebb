//! Cumulative principal and interest of a level-payment loan.
//!
//! The loan of `present_value` is repaid over `total_periods` level payments
//! computed by [`level_payment`] with a zero future value. For a positive present
//! value the payment, its principal part and its interest part all come out
//! negative: cash paid by the borrower.
//!
//! The principal and interest of period `k` are derived from the balance after
//! `k - 1` periods (or `k - 2` for an annuity-due, whose first payment carries no
//! interest), obtained from [`future_value`].
//!
//! # Example
//!
//! ```rust
//! use accrue_analytics::amortization::{cumulative_interest, cumulative_principal, AmortizationQuery};
//! use accrue_analytics::valuation::PaymentTiming;
//!
//! // Second year of a 30-year mortgage of 125,000 at 9% annual
//! let query = AmortizationQuery::new(0.09 / 12.0, 360, 125_000.0, 13, 24, PaymentTiming::EndOfPeriod);
//!
//! let principal = cumulative_principal(&query).unwrap();
//! let interest = cumulative_interest(&query).unwrap();
//! assert!((principal - -934.1071234).abs() < 1e-6);
//! assert!((interest - -11135.23213).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::valuation::{future_value, level_payment, PaymentTiming};

/// A cumulative principal or interest query over an inclusive period range.
///
/// Periods are 1-based. Integer fields are signed so that out-of-range input can
/// be reported as a parameter error instead of being unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationQuery {
    /// Interest rate per period.
    pub rate: f64,
    /// Number of payments over the life of the loan.
    pub total_periods: i64,
    /// Loan principal.
    pub present_value: f64,
    /// First period of the range.
    pub start_period: i64,
    /// Last period of the range, inclusive.
    pub end_period: i64,
    /// Payment timing.
    pub timing: PaymentTiming,
}

impl AmortizationQuery {
    /// Creates a new query.
    #[must_use]
    pub fn new(
        rate: f64,
        total_periods: i64,
        present_value: f64,
        start_period: i64,
        end_period: i64,
        timing: PaymentTiming,
    ) -> Self {
        Self {
            rate,
            total_periods,
            present_value,
            start_period,
            end_period,
            timing,
        }
    }

    /// Creates a query from an integer timing flag (`0` end, `1` beginning).
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidParameters` for a flag outside `{0, 1}`.
    pub fn with_timing_flag(
        rate: f64,
        total_periods: i64,
        present_value: f64,
        start_period: i64,
        end_period: i64,
        timing_flag: i64,
    ) -> AnalyticsResult<Self> {
        let timing = PaymentTiming::try_from(timing_flag)?;
        Ok(Self::new(
            rate,
            total_periods,
            present_value,
            start_period,
            end_period,
            timing,
        ))
    }

    /// Checks the preconditions of the cumulative queries.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidParameters` naming the first violated
    /// precondition.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if self.start_period < 1 {
            return Err(AnalyticsError::invalid_parameters(format!(
                "start period must be at least 1, got {}",
                self.start_period
            )));
        }
        if self.end_period < self.start_period {
            return Err(AnalyticsError::invalid_parameters(format!(
                "end period {} precedes start period {}",
                self.end_period, self.start_period
            )));
        }
        if self.end_period > self.total_periods {
            return Err(AnalyticsError::invalid_parameters(format!(
                "end period {} exceeds the {} periods of the loan",
                self.end_period, self.total_periods
            )));
        }
        validate_loan(self.rate, self.total_periods, self.present_value)?;
        Ok(())
    }
}

/// One period of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based period number.
    pub period: u32,
    /// Level payment.
    pub payment: f64,
    /// Principal part of the payment.
    pub principal: f64,
    /// Interest part of the payment.
    pub interest: f64,
}

/// Period-by-period breakdown of a level-payment loan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmortizationSchedule {
    rate: f64,
    periods: u32,
    present_value: f64,
    timing: PaymentTiming,
    payment: f64,
}

impl AmortizationSchedule {
    /// Creates a schedule for a loan of `present_value` over `periods` payments.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidParameters` if `rate <= 0`, `periods == 0`
    /// or `present_value <= 0`.
    pub fn new(
        rate: f64,
        periods: u32,
        present_value: f64,
        timing: PaymentTiming,
    ) -> AnalyticsResult<Self> {
        validate_loan(rate, i64::from(periods), present_value)?;
        let payment = level_payment(rate, periods, present_value, 0.0, timing)?;

        Ok(Self {
            rate,
            periods,
            present_value,
            timing,
            payment,
        })
    }

    /// Returns the level payment.
    #[must_use]
    pub fn payment(&self) -> f64 {
        self.payment
    }

    /// Returns the number of periods.
    #[must_use]
    pub fn periods(&self) -> u32 {
        self.periods
    }

    /// Returns the breakdown of a single period, or `None` outside `1..=periods`.
    #[must_use]
    pub fn row(&self, period: u32) -> Option<AmortizationRow> {
        if period == 0 || period > self.periods {
            return None;
        }
        Some(AmortizationRow {
            period,
            payment: self.payment,
            principal: self.principal_in(period),
            interest: self.interest_in(period),
        })
    }

    /// Iterates over every period in order.
    pub fn rows(&self) -> impl Iterator<Item = AmortizationRow> + '_ {
        (1..=self.periods).filter_map(move |period| self.row(period))
    }

    /// Principal part of the payment in `period` (1-based).
    fn principal_in(&self, period: u32) -> f64 {
        let (rate, pmt, pv) = (self.rate, self.payment, self.present_value);
        match (self.timing, period) {
            (PaymentTiming::EndOfPeriod, 1) => pmt + pv * rate,
            (PaymentTiming::BeginningOfPeriod, 1) => pmt,
            (PaymentTiming::EndOfPeriod, k) => {
                pmt - future_value(rate, k - 1, pmt, pv, PaymentTiming::EndOfPeriod) * rate
            }
            (PaymentTiming::BeginningOfPeriod, k) => {
                pmt - (future_value(rate, k - 2, pmt, pv, PaymentTiming::BeginningOfPeriod) - pmt)
                    * rate
            }
        }
    }

    /// Interest part of the payment in `period` (1-based).
    fn interest_in(&self, period: u32) -> f64 {
        let (rate, pmt, pv) = (self.rate, self.payment, self.present_value);
        match (self.timing, period) {
            (PaymentTiming::EndOfPeriod, 1) => -pv * rate,
            (PaymentTiming::BeginningOfPeriod, 1) => 0.0,
            (PaymentTiming::EndOfPeriod, k) => {
                future_value(rate, k - 1, pmt, pv, PaymentTiming::EndOfPeriod) * rate
            }
            (PaymentTiming::BeginningOfPeriod, k) => {
                (future_value(rate, k - 2, pmt, pv, PaymentTiming::BeginningOfPeriod) - pmt) * rate
            }
        }
    }

    fn sum_over<F>(&self, start: u32, end: u32, part: F) -> f64
    where
        F: Fn(&Self, u32) -> f64,
    {
        (start..=end).map(|period| part(self, period)).sum()
    }
}

/// Cumulative principal repaid over `start_period..=end_period`.
///
/// # Errors
///
/// Returns `AnalyticsError::InvalidParameters` if any precondition of
/// [`AmortizationQuery::validate`] fails.
pub fn cumulative_principal(query: &AmortizationQuery) -> AnalyticsResult<f64> {
    let (schedule, start, end) = schedule_for(query)?;
    Ok(schedule.sum_over(start, end, AmortizationSchedule::principal_in))
}

/// Cumulative interest paid over `start_period..=end_period`.
///
/// # Errors
///
/// Returns `AnalyticsError::InvalidParameters` if any precondition of
/// [`AmortizationQuery::validate`] fails.
pub fn cumulative_interest(query: &AmortizationQuery) -> AnalyticsResult<f64> {
    let (schedule, start, end) = schedule_for(query)?;
    Ok(schedule.sum_over(start, end, AmortizationSchedule::interest_in))
}

fn schedule_for(query: &AmortizationQuery) -> AnalyticsResult<(AmortizationSchedule, u32, u32)> {
    query.validate()?;

    let periods = to_period(query.total_periods)?;
    let start = to_period(query.start_period)?;
    let end = to_period(query.end_period)?;
    let schedule =
        AmortizationSchedule::new(query.rate, periods, query.present_value, query.timing)?;

    Ok((schedule, start, end))
}

fn to_period(value: i64) -> AnalyticsResult<u32> {
    u32::try_from(value).map_err(|_| {
        AnalyticsError::invalid_parameters(format!("period {value} is out of range"))
    })
}

fn validate_loan(rate: f64, total_periods: i64, present_value: f64) -> AnalyticsResult<()> {
    if rate.is_nan() || rate <= 0.0 {
        return Err(AnalyticsError::invalid_parameters(format!(
            "rate must be positive, got {rate}"
        )));
    }
    if total_periods <= 0 {
        return Err(AnalyticsError::invalid_parameters(format!(
            "total periods must be positive, got {total_periods}"
        )));
    }
    if present_value.is_nan() || present_value <= 0.0 {
        return Err(AnalyticsError::invalid_parameters(format!(
            "present value must be positive, got {present_value}"
        )));
    }
    Ok(())
}
