//! Domain types for cash-flow analytics.
//!
//! - [`Date`]: Calendar date without time of day
//! - [`CashFlow`]: Dated, signed amount
//! - [`CashFlowSeries`]: Ordered sequence of cash flows with an anchor entry

mod cashflow;
mod date;

pub use cashflow::{CashFlow, CashFlowSeries};
pub use date::Date;
