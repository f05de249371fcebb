//! Internal rate of return of regular periodic cash flows.
//!
//! IRR ignores dates: the flow at index `j` is discounted by `j` whole periods. The
//! rate is located by narrowing a fixed bracket, `[0.01, 0.50]` by default, so
//! roots outside the bracket are not found.
//!
//! The search always produces a best guess. Whether that guess is accepted is
//! decided by a final check comparing the guess with the periodic value at the
//! guess: when they differ by more than the acceptance tolerance the outcome
//! carries a calculation error next to the guess. As the value at a root is close
//! to zero, the check accepts only rates that are themselves close to zero, so most
//! outcomes carry the error; callers that only need the best guess read
//! [`IrrOutcome::rate`] regardless.

use log::debug;
use serde::{Deserialize, Serialize};

use accrue_core::CashFlowSeries;
use accrue_math::solvers::{bracket_search, BracketConfig};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::valuation::periodic_value_at_rate;

/// Minimum number of entries for IRR.
pub const MIN_IRR_CASH_FLOWS: usize = 2;

/// Tuning of the IRR solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IrrConfig {
    /// Bracket, iteration cap and early-stop tolerance of the search.
    pub bracket: BracketConfig,
    /// Largest accepted `|rate - value(rate)|` after the search.
    pub acceptance_tolerance: f64,
}

impl Default for IrrConfig {
    fn default() -> Self {
        Self {
            bracket: BracketConfig::default(),
            acceptance_tolerance: 1e-10,
        }
    }
}

/// Result of an IRR search.
#[derive(Debug, Clone, PartialEq)]
pub struct IrrOutcome {
    /// Best guess of the periodic rate.
    pub rate: f64,
    /// Number of periodic valuations performed.
    pub iterations: u32,
    /// Periodic value at the last evaluated guess.
    pub residual: f64,
    /// Final `(low, high)` bracket; `rate` lies within it.
    pub bracket: (f64, f64),
    /// Calculation error reported alongside the guess, if the final check failed.
    pub error: Option<AnalyticsError>,
}

impl IrrOutcome {
    /// Returns true if the final check accepted the guess.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.error.is_none()
    }

    /// Converts the outcome into the accepted rate or its calculation error.
    pub fn into_result(self) -> AnalyticsResult<f64> {
        match self.error {
            None => Ok(self.rate),
            Some(err) => Err(err),
        }
    }
}

/// IRR solver.
///
/// # Example
///
/// ```rust
/// use accrue_analytics::rates::IrrSolver;
/// use accrue_core::{CashFlow, CashFlowSeries, Date};
///
/// let d = Date::from_ymd(2024, 1, 1).unwrap();
/// let series: CashFlowSeries = [-100.0, 40.0, 40.0, 40.0]
///     .into_iter()
///     .map(|amount| CashFlow::new(d, amount))
///     .collect();
///
/// let outcome = IrrSolver::new().solve(&series).unwrap();
/// assert!((outcome.rate - 0.0970102574).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IrrSolver {
    config: IrrConfig,
}

impl IrrSolver {
    /// Creates a solver with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    #[must_use]
    pub fn with_config(mut self, config: IrrConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the initial bracket.
    #[must_use]
    pub fn with_bracket(mut self, low: f64, high: f64) -> Self {
        self.config.bracket = self.config.bracket.with_bracket(low, high);
        self
    }

    /// Sets the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config.bracket = self.config.bracket.with_max_iterations(max_iterations);
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &IrrConfig {
        &self.config
    }

    /// Searches the bracket for the rate at which the periodic value is zero.
    ///
    /// # Errors
    ///
    /// - `AnalyticsError::InsufficientCashFlows` for fewer than two entries
    /// - `AnalyticsError::InvalidData` if an amount is not finite
    ///
    /// A failed final check is not an `Err`: it is reported in
    /// [`IrrOutcome::error`] together with the best guess.
    pub fn solve(&self, series: &CashFlowSeries) -> AnalyticsResult<IrrOutcome> {
        if series.len() < MIN_IRR_CASH_FLOWS {
            return Err(AnalyticsError::insufficient_cash_flows(
                MIN_IRR_CASH_FLOWS,
                series.len(),
            ));
        }
        series.ensure_finite()?;

        let search = bracket_search(
            |rate| periodic_value_at_rate(series, rate),
            &self.config.bracket,
        );

        // A NaN residual (no evaluation, or a non-finite valuation) never passes
        let accepted =
            (search.root - search.residual).abs() <= self.config.acceptance_tolerance;
        let error = if !accepted {
            debug!(
                "irr guess {:.10} rejected: value {:.3e} after {} iterations",
                search.root, search.residual, search.iterations
            );
            Some(AnalyticsError::convergence_failed(
                "irr",
                search.iterations,
                search.residual,
            ))
        } else {
            None
        };

        Ok(IrrOutcome {
            rate: search.root,
            iterations: search.iterations,
            residual: search.residual,
            bracket: (search.low, search.high),
            error,
        })
    }
}

/// IRR of `series` with the default solver.
///
/// # Errors
///
/// See [`IrrSolver::solve`].
pub fn irr(series: &CashFlowSeries) -> AnalyticsResult<IrrOutcome> {
    IrrSolver::new().solve(series)
}
