//! Root-finding algorithms.
//!
//! This module provides numerical solvers for finding the rate at which a
//! valuation function is zero:
//!
//! - [`newton_raphson`]: Fast quadratic convergence when the derivative is available
//! - [`newton_with_restarts`]: Newton-Raphson retried over a deterministic seed sweep
//! - [`bracket_search`]: Derivative-free narrowing of a fixed bracket
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Newton-Raphson | Fastest (quadratic) | May diverge | Derivative |
//! | Newton with restarts | Fast | Finds a root if any seed converges | Derivative |
//! | Bracket search | Slow (linear) | Best guess always returned | Bracket |
//!
//! # Example: Rate of a Single-Period Investment
//!
//! ```rust
//! use accrue_math::solvers::{newton_with_restarts, RestartSchedule, SolverConfig};
//!
//! // Invest 100 now, receive 110 in one year
//! let f = |r: f64| -100.0 + 110.0 / (1.0 + r);
//! let df = |r: f64| -110.0 / ((1.0 + r) * (1.0 + r));
//!
//! let result = newton_with_restarts(
//!     f,
//!     df,
//!     &RestartSchedule::default(),
//!     &SolverConfig::default(),
//! )
//! .unwrap();
//! assert!((result.solution.root - 0.10).abs() < 1e-10);
//! ```

mod bracket;
mod newton;
mod restart;

pub use bracket::{bracket_search, BracketConfig, BracketOutcome};
pub use newton::newton_raphson;
pub use restart::{newton_with_restarts, RestartResult, RestartSchedule};

use serde::{Deserialize, Serialize};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for a single Newton-Raphson run.
pub const DEFAULT_MAX_ITERATIONS: u32 = 50;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a converged root-finding run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}
