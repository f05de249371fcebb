//! Internal rate of return solvers.
//!
//! - [`xirr`]: dated, irregular flows; Newton-Raphson with scanned restarts
//! - [`irr`]: regular periodic flows, dates ignored; bracket narrowing
//!
//! | Solver | Discounting | Minimum entries | Failure |
//! |--------|-------------|-----------------|---------|
//! | XIRR | `(1 + r)^((d_i - d_0) / 365)` | 3 | `Err` after every seed fails |
//! | IRR | `(1 + r)^j` | 2 | best guess with an attached error |

mod irr;
mod xirr;

pub use irr::{irr, IrrConfig, IrrOutcome, IrrSolver, MIN_IRR_CASH_FLOWS};
pub use xirr::{xirr, XirrConfig, XirrResult, XirrSolver, MIN_XIRR_CASH_FLOWS};
