//! Error types for the Accrue core types.
//!
//! Construction of dates and cash flows is the only fallible work done in this
//! crate; numerical failures live in `accrue-math` and `accrue-analytics`.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type AccrueResult<T> = Result<T, AccrueError>;

/// The error type for core type construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccrueError {
    /// Invalid calendar date or malformed date string.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Invalid cash flow or cash-flow series.
    #[error("Invalid cash flow: {reason}")]
    InvalidCashFlow {
        /// Description of the invalid cash flow.
        reason: String,
    },
}

impl AccrueError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid cash flow error.
    #[must_use]
    pub fn invalid_cash_flow(reason: impl Into<String>) -> Self {
        Self::InvalidCashFlow {
            reason: reason.into(),
        }
    }
}
