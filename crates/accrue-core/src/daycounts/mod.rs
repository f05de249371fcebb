//! Day count conventions for cash-flow valuation.
//!
//! A day count convention turns a calendar span into a fraction of a year, which is
//! the exponent used when discounting a dated cash flow.
//!
//! # Supported Conventions
//!
//! - [`Act365Fixed`]: Actual/365 Fixed - actual calendar days over a 365-day year
//!
//! # Usage
//!
//! ```rust
//! use accrue_core::daycounts::{Act365Fixed, DayCount};
//! use accrue_core::types::Date;
//!
//! let dc = Act365Fixed;
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2026, 1, 1).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 365);
//! assert_eq!(dc.year_fraction(start, end), 1.0);
//! ```

mod act365;

pub use act365::Act365Fixed;

use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`) so a single convention value
/// can be shared by solvers running on different threads.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end` precedes `start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}
