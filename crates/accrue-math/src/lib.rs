//! # Accrue Math
//!
//! Numerical root-finding for the Accrue time-value-of-money library.
//!
//! This crate provides:
//!
//! - **Newton-Raphson**: quadratic convergence when an analytic derivative exists
//! - **Scanned restarts**: Newton-Raphson retried from a deterministic sweep of seeds
//! - **Bracket search**: derivative-free narrowing of a fixed rate bracket
//!
//! ## Design Philosophy
//!
//! - **Deterministic**: restarts follow a fixed schedule, never random seeds, so
//!   identical input always yields an identical root
//! - **Explicit failure**: a solver either converges or returns an error; the
//!   bracket search reports its best guess together with a convergence flag

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        bracket_search, newton_raphson, newton_with_restarts, BracketConfig, BracketOutcome,
        RestartResult, RestartSchedule, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
