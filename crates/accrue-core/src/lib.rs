//! # Accrue Core
//!
//! Core types for the Accrue time-value-of-money library.
//!
//! This crate provides the foundational building blocks used throughout Accrue:
//!
//! - **Types**: [`Date`], [`CashFlow`] and [`CashFlowSeries`]
//! - **Day Count Conventions**: Actual/365 Fixed year fractions
//!
//! ## Design Philosophy
//!
//! - **Whole days only**: dates carry no time of day, so day differences are exact
//! - **Immutable series**: reordering returns a new series, so a series can be shared
//!   between concurrent solves without locking
//!
//! ## Example
//!
//! ```rust
//! use accrue_core::prelude::*;
//!
//! let start = Date::parse("2000-05-15").unwrap();
//! let series = CashFlowSeries::monthly(
//!     -100_000.0,
//!     start,
//!     36,
//!     4_000.0,
//!     Date::parse("2000-06-20").unwrap(),
//! );
//! assert_eq!(series.len(), 37);
//! assert_eq!(series.first_date(), start);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act365Fixed, DayCount};
    pub use crate::error::{AccrueError, AccrueResult};
    pub use crate::types::{CashFlow, CashFlowSeries, Date};
}

// Re-export commonly used types at crate root
pub use error::{AccrueError, AccrueResult};
pub use types::{CashFlow, CashFlowSeries, Date};
