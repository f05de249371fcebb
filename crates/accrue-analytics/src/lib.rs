//! # Accrue Analytics
//!
//! Time-value-of-money calculations over cash-flow series.
//!
//! This crate provides:
//! - **Valuation**: XNPV and NPV, dated and periodic discounting
//! - **Annuities**: present value, future value, level payment, capital recovery
//! - **Rates**: XIRR (Newton-Raphson with scanned restarts) and IRR (bracket search)
//! - **Amortization**: cumulative principal and interest, per-period schedules
//! - **Yields**: nominal and effective rate conversions
//! - **Metrics**: batch XIRR/XNPV over many series, optionally in parallel
//!
//! ## Architecture
//!
//! `accrue-analytics` depends on `accrue-core` for dates and cash-flow series and
//! on `accrue-math` for the root finders. Neither depends on this crate.
//!
//! ## Usage
//!
//! ```rust
//! use accrue_analytics::prelude::*;
//! use accrue_core::prelude::*;
//!
//! let series = CashFlowSeries::monthly(
//!     -100_000.0,
//!     Date::parse("2000-05-15").unwrap(),
//!     36,
//!     4_000.0,
//!     Date::parse("2000-06-20").unwrap(),
//! );
//!
//! let rate = xirr(&series).unwrap();
//! let value = xnpv(0.04, &series).unwrap();
//!
//! assert!((rate - 0.2826335).abs() < 1e-6);
//! assert!((value - 35543.5544).abs() < 1e-3);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;

pub use error::{AnalyticsError, AnalyticsResult, ErrorKind};

pub mod amortization;
pub mod cashflows;
pub mod metrics;
pub mod rates;
pub mod valuation;
pub mod yields;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::amortization::{
        cumulative_interest, cumulative_principal, AmortizationQuery, AmortizationRow,
        AmortizationSchedule,
    };
    pub use crate::cashflows::loan_cash_flows;
    pub use crate::error::{AnalyticsError, AnalyticsResult, ErrorKind};
    pub use crate::metrics::{evaluate_series, evaluate_series_with, MetricsConfig, SeriesMetrics};
    pub use crate::rates::{
        irr, xirr, IrrConfig, IrrOutcome, IrrSolver, XirrConfig, XirrResult, XirrSolver,
    };
    pub use crate::valuation::{
        capital_recovery_factor, future_value, level_payment, npv, periodic_value_at_rate,
        present_value, return_coefficient, value_at_rate, value_derivative_at_rate, xnpv,
        PaymentTiming,
    };
    pub use crate::yields::{effective_rate, nominal_rate};
}
