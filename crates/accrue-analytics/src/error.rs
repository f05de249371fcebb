//! Error types for the analytics engine.
//!
//! Every failure is classified by [`ErrorKind`]: parameter errors reject the input
//! before any evaluation, calculation errors report a solver that could not produce
//! a trustworthy rate.

use thiserror::Error;

/// Broad classification of an [`AnalyticsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The inputs violate a documented precondition.
    Parameter,
    /// The inputs were accepted but the computation did not succeed.
    Calculation,
}

/// Unified error type for all analytics operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// Invalid input parameter
    #[error("invalid parameters: {reason}")]
    InvalidParameters {
        /// Description of the violated precondition.
        reason: String,
    },

    /// Too few cash flows for the requested calculation
    #[error("at least {required} cash flows are required, got {actual}")]
    InsufficientCashFlows {
        /// Minimum number of entries.
        required: usize,
        /// Number of entries provided.
        actual: usize,
    },

    /// Solver convergence failed
    #[error("{solver} failed to converge after {iterations} iterations (residual: {residual})")]
    SolverConvergenceFailed {
        /// Name of the solver that failed.
        solver: String,
        /// Number of iterations (or restart attempts) before failure.
        iterations: u32,
        /// Final residual value when the solver stopped.
        residual: f64,
    },

    /// Invalid date or cash flow reported by the core types
    #[error("invalid cash flow data: {0}")]
    InvalidData(String),

    /// Math/solver error
    #[error("math error: {0}")]
    MathError(String),
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl AnalyticsError {
    /// Creates an invalid parameters error.
    #[must_use]
    pub fn invalid_parameters(reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient cash flows error.
    #[must_use]
    pub fn insufficient_cash_flows(required: usize, actual: usize) -> Self {
        Self::InsufficientCashFlows { required, actual }
    }

    /// Creates a solver convergence error.
    #[must_use]
    pub fn convergence_failed(solver: impl Into<String>, iterations: u32, residual: f64) -> Self {
        Self::SolverConvergenceFailed {
            solver: solver.into(),
            iterations,
            residual,
        }
    }

    /// Returns the classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameters { .. }
            | Self::InsufficientCashFlows { .. }
            | Self::InvalidData(_) => ErrorKind::Parameter,
            Self::SolverConvergenceFailed { .. } | Self::MathError(_) => ErrorKind::Calculation,
        }
    }

    /// Returns true for errors raised before any evaluation.
    #[must_use]
    pub fn is_parameter_error(&self) -> bool {
        self.kind() == ErrorKind::Parameter
    }

    /// Returns true for errors raised by a failed computation.
    #[must_use]
    pub fn is_calculation_error(&self) -> bool {
        self.kind() == ErrorKind::Calculation
    }
}

impl From<accrue_core::AccrueError> for AnalyticsError {
    fn from(err: accrue_core::AccrueError) -> Self {
        AnalyticsError::InvalidData(err.to_string())
    }
}

impl From<accrue_math::MathError> for AnalyticsError {
    fn from(err: accrue_math::MathError) -> Self {
        match err {
            accrue_math::MathError::RestartsExhausted { attempts, residual } => {
                AnalyticsError::convergence_failed("newton with restarts", attempts, residual)
            }
            accrue_math::MathError::ConvergenceFailed {
                iterations,
                residual,
            } => AnalyticsError::convergence_failed("newton-raphson", iterations, residual),
            accrue_math::MathError::InvalidInput { reason } => {
                AnalyticsError::InvalidParameters { reason }
            }
            other => AnalyticsError::MathError(other.to_string()),
        }
    }
}
