//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during root finding.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Root-finding algorithm failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// Every seed of a restart schedule failed.
    #[error("No seed converged after {attempts} restart attempts (last residual: {residual:.2e})")]
    RestartsExhausted {
        /// Number of seeds tried.
        attempts: u32,
        /// Residual of the last attempt, NaN when it never produced a finite value.
        residual: f64,
    },

    /// An iterate or function value became NaN or infinite.
    #[error("Non-finite value {value} at iteration {iteration}")]
    NonFinite {
        /// Iteration at which the value appeared.
        iteration: u32,
        /// The offending value.
        value: f64,
    },

    /// Division by zero.
    #[error("Division by zero or near-zero value: {value:.2e}")]
    DivisionByZero {
        /// The zero value.
        value: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a non-finite value error.
    #[must_use]
    pub fn non_finite(iteration: u32, value: f64) -> Self {
        Self::NonFinite { iteration, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::convergence_failed(100, 1e-6);
        assert!(err.to_string().contains("100 iterations"));
    }

    #[test]
    fn test_restarts_exhausted_display() {
        let err = MathError::RestartsExhausted {
            attempts: 200,
            residual: f64::NAN,
        };
        assert!(err.to_string().contains("200 restart attempts"));
    }
}
