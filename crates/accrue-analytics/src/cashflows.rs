//! Cash-flow series built from loan terms.

use accrue_core::{CashFlowSeries, Date};

use crate::error::AnalyticsResult;
use crate::valuation::{level_payment, PaymentTiming};

/// Lender's view of a level-payment loan with monthly installments.
///
/// The principal is paid out at `start` (a negative anchor flow), followed by
/// `periods` equal installments, the first one calendar month after `start` and
/// each later one a month after the previous. The installment is the ordinary
/// annuity payment at `periodic_rate`.
///
/// The XIRR of the result is the annual yield of the loan on an Actual/365 basis.
/// It sits close to, but not on, the monthly-compounded effective rate, since
/// calendar months are not twelfths of a 365-day year.
///
/// # Errors
///
/// Returns `AnalyticsError::InvalidParameters` if `periods` is zero or the
/// installment is zero, and `AnalyticsError::InvalidData` if the first installment
/// date is out of range.
///
/// # Example
///
/// ```rust
/// use accrue_analytics::cashflows::loan_cash_flows;
/// use accrue_core::Date;
///
/// let start = Date::parse("2010-05-10").unwrap();
/// let series = loan_cash_flows(1_000_000.0, start, 240, 0.12345 / 12.0).unwrap();
///
/// assert_eq!(series.len(), 241);
/// assert_eq!(series.flows()[1].date(), Date::parse("2010-06-10").unwrap());
/// ```
pub fn loan_cash_flows(
    principal: f64,
    start: Date,
    periods: u32,
    periodic_rate: f64,
) -> AnalyticsResult<CashFlowSeries> {
    let installment = -level_payment(
        periodic_rate,
        periods,
        principal,
        0.0,
        PaymentTiming::EndOfPeriod,
    )?;
    let first_installment = start.add_one_month()?;

    Ok(CashFlowSeries::monthly(
        -principal,
        start,
        periods,
        installment,
        first_installment,
    ))
}
