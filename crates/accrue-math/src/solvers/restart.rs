//! Newton-Raphson with deterministic scanned restarts.
//!
//! Newton's method can diverge or oscillate when the objective is badly shaped
//! around the starting point. Instead of random restarts, the solver walks a fixed
//! seed schedule: a preferred initial guess first, then an evenly spaced sweep.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::solvers::{newton_raphson, SolverConfig, SolverResult};

/// Seed schedule for [`newton_with_restarts`].
///
/// Attempt `0` starts from `initial_guess`; attempt `s >= 1` starts from
/// `scan_start + (s - 1) * scan_step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestartSchedule {
    /// Seed for the first attempt.
    pub initial_guess: f64,
    /// Seed for the second attempt, where the sweep begins.
    pub scan_start: f64,
    /// Distance between consecutive sweep seeds.
    pub scan_step: f64,
    /// Total number of attempts, the initial guess included.
    pub attempts: u32,
}

impl Default for RestartSchedule {
    /// 10% first, then -99% to +99% in 1% steps: 200 attempts in all.
    fn default() -> Self {
        Self {
            initial_guess: 0.1,
            scan_start: -0.99,
            scan_step: 0.01,
            attempts: 200,
        }
    }
}

impl RestartSchedule {
    /// Sets the seed of the first attempt.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Sets the total number of attempts.
    #[must_use]
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Returns the seed used by a given attempt.
    #[must_use]
    pub fn seed(&self, attempt: u32) -> f64 {
        if attempt == 0 {
            self.initial_guess
        } else {
            self.scan_start + f64::from(attempt - 1) * self.scan_step
        }
    }

    /// Iterates over `(attempt, seed)` pairs in schedule order.
    pub fn seeds(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        (0..self.attempts).map(move |attempt| (attempt, self.seed(attempt)))
    }
}

/// A converged restart run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestartResult {
    /// The converged Newton-Raphson run.
    pub solution: SolverResult,
    /// Zero-based index of the attempt that converged.
    pub attempt: u32,
    /// Seed the converged attempt started from.
    pub seed: f64,
}

/// Runs Newton-Raphson from each seed of `schedule` until one attempt converges.
///
/// Any failure of an attempt (non-finite iterate, vanishing derivative, iteration
/// cap) moves on to the next seed. Attempts are evaluated in order, so the same
/// input always converges from the same seed to the same root.
///
/// # Errors
///
/// - `MathError::InvalidInput` if the schedule has zero attempts
/// - `MathError::RestartsExhausted` if no seed converges
pub fn newton_with_restarts<F, DF>(
    f: F,
    df: DF,
    schedule: &RestartSchedule,
    config: &SolverConfig,
) -> MathResult<RestartResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    if schedule.attempts == 0 {
        return Err(MathError::invalid_input("restart schedule has no attempts"));
    }

    let mut last_residual = f64::NAN;

    for (attempt, seed) in schedule.seeds() {
        match newton_raphson(&f, &df, seed, config) {
            Ok(solution) => {
                debug!(
                    "newton converged from seed {seed} (attempt {attempt}) after {} iterations",
                    solution.iterations
                );
                return Ok(RestartResult {
                    solution,
                    attempt,
                    seed,
                });
            }
            Err(err) => {
                trace!("newton attempt {attempt} from seed {seed} failed: {err}");
                last_residual = match err {
                    MathError::ConvergenceFailed { residual, .. } => residual,
                    _ => f64::NAN,
                };
            }
        }
    }

    debug!(
        "newton restarts exhausted after {} attempts",
        schedule.attempts
    );
    Err(MathError::RestartsExhausted {
        attempts: schedule.attempts,
        residual: last_residual,
    })
}
