//! Cash flow entries and ordered cash-flow series.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;
use crate::error::{AccrueError, AccrueResult};

/// A single dated cash flow.
///
/// Amounts are signed: outflows are negative and inflows positive by convention,
/// although nothing in the valuation code depends on the sign.
///
/// # Example
///
/// ```rust
/// use accrue_core::types::{CashFlow, Date};
///
/// let cf = CashFlow::new(Date::from_ymd(2000, 5, 15).unwrap(), -100_000.0);
/// assert_eq!(cf.amount(), -100_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment date
    date: Date,
    /// Signed amount
    #[serde(rename = "flow")]
    amount: f64,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(date: Date, amount: f64) -> Self {
        Self { date, amount }
    }

    /// Returns the payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the signed amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date: {} | flow: {}", self.date, self.amount)
    }
}

/// An ordered sequence of cash flows describing one investment timeline.
///
/// Insertion order is meaningful: the first entry is the anchor flow, its date is
/// time zero for dated valuation and its index is period zero for periodic
/// valuation. The series is never mutated after construction;
/// [`CashFlowSeries::order_by_date`] returns a new series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CashFlowSeries {
    flows: Vec<CashFlow>,
}

impl CashFlowSeries {
    /// Creates a series from entries in the given order.
    #[must_use]
    pub fn new(flows: Vec<CashFlow>) -> Self {
        Self { flows }
    }

    /// Builds an anchor flow followed by `months` equal monthly flows.
    ///
    /// The first recurring flow falls on `income_start`; each subsequent one is one
    /// calendar month after the previous, using [`Date::add_one_month`]. Dates
    /// beyond the supported calendar range end the series early.
    #[must_use]
    pub fn monthly(
        first_amount: f64,
        first_date: Date,
        months: u32,
        income: f64,
        income_start: Date,
    ) -> Self {
        let mut flows = Vec::with_capacity(months as usize + 1);
        flows.push(CashFlow::new(first_date, first_amount));

        let mut current = Some(income_start);
        for _ in 0..months {
            let Some(date) = current else { break };
            flows.push(CashFlow::new(date, income));
            current = date.add_one_month().ok();
        }

        Self { flows }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Returns true if the series has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Returns the entries as a slice.
    #[must_use]
    pub fn flows(&self) -> &[CashFlow] {
        &self.flows
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, CashFlow> {
        self.flows.iter()
    }

    /// Returns the anchor entry, or `None` for an empty series.
    #[must_use]
    pub fn try_first(&self) -> Option<&CashFlow> {
        self.flows.first()
    }

    /// Returns the amount of the anchor entry.
    ///
    /// # Panics
    ///
    /// Panics if the series is empty. Every public solver checks the length of the
    /// series before reaching this accessor.
    #[must_use]
    pub fn first_flow(&self) -> f64 {
        match self.flows.first() {
            Some(cf) => cf.amount,
            None => panic!("first flow requested from an empty cash-flow series"),
        }
    }

    /// Returns the date of the anchor entry.
    ///
    /// # Panics
    ///
    /// Panics if the series is empty.
    #[must_use]
    pub fn first_date(&self) -> Date {
        match self.flows.first() {
            Some(cf) => cf.date,
            None => panic!("first date requested from an empty cash-flow series"),
        }
    }

    /// Returns a new series sorted by date ascending.
    ///
    /// The sort is stable, so entries sharing a date keep their relative order.
    #[must_use]
    pub fn order_by_date(&self) -> Self {
        let mut flows = self.flows.clone();
        flows.sort_by_key(CashFlow::date);
        Self { flows }
    }

    /// Returns the sum of all amounts.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.flows.iter().map(CashFlow::amount).sum()
    }

    /// Checks that every amount is a finite number.
    pub fn ensure_finite(&self) -> AccrueResult<()> {
        match self
            .flows
            .iter()
            .enumerate()
            .find(|(_, cf)| !cf.amount.is_finite())
        {
            Some((index, cf)) => Err(AccrueError::invalid_cash_flow(format!(
                "entry {index} on {} has non-finite amount {}",
                cf.date, cf.amount
            ))),
            None => Ok(()),
        }
    }
}

impl From<Vec<CashFlow>> for CashFlowSeries {
    fn from(flows: Vec<CashFlow>) -> Self {
        Self::new(flows)
    }
}

impl FromIterator<CashFlow> for CashFlowSeries {
    fn from_iter<I: IntoIterator<Item = CashFlow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CashFlowSeries {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.flows.iter()
    }
}

impl fmt::Display for CashFlowSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cf in &self.flows {
            writeln!(f, "{cf}")?;
        }
        Ok(())
    }
}
