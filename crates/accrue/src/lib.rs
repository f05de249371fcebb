//! # Accrue
//!
//! Time-value-of-money analytics: XIRR, IRR, XNPV/NPV, annuities and amortization.
//!
//! This facade re-exports the public API of the workspace crates:
//!
//! - [`accrue_core`]: dates, the Actual/365 Fixed day count and cash-flow series
//! - [`accrue_math`]: Newton-Raphson, scanned restarts and bracket search
//! - [`accrue_analytics`]: valuation, rate solvers, annuities, amortization and batch metrics
//!
//! ## Example
//!
//! ```rust
//! use accrue::prelude::*;
//!
//! let series = CashFlowSeries::monthly(
//!     -100_000.0,
//!     Date::parse("2000-05-15")?,
//!     36,
//!     6_000.0,
//!     Date::parse("2000-06-20")?,
//! );
//!
//! let rate = xirr(&series)?;
//! assert!((rate - 0.769936717).abs() < 1e-8);
//!
//! let payment = level_payment(0.05, 36, 10_000.0, 500.0, PaymentTiming::BeginningOfPeriod)?;
//! assert!((payment - -580.54).abs() < 0.01);
//! # Ok::<(), accrue::AnalyticsError>(())
//! ```

#![warn(missing_docs)]

pub use accrue_analytics;
pub use accrue_core;
pub use accrue_math;

pub use accrue_analytics::{AnalyticsError, AnalyticsResult, ErrorKind};
pub use accrue_core::{AccrueError, AccrueResult, CashFlow, CashFlowSeries, Date};
pub use accrue_math::{MathError, MathResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use accrue_analytics::prelude::*;
    pub use accrue_core::prelude::*;
}
