//! Bracket-narrowing root search.
//!
//! A bisection variant that never evaluates the bracket endpoints. The search
//! starts at the low bound and, after each evaluation, compares the new function
//! value with the previous one to decide which bound collapses onto the current
//! guess. The next guess is always the bracket midpoint.
//!
//! For a function that decreases through its root inside the bracket (the usual
//! shape of a present value as a function of rate), a negative value moves the high
//! bound down and a positive value moves the low bound up.

use serde::{Deserialize, Serialize};

/// Configuration for [`bracket_search`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BracketConfig {
    /// Initial low bound, also the first guess.
    pub low: f64,
    /// Initial high bound.
    pub high: f64,
    /// Maximum number of function evaluations.
    pub max_iterations: u32,
    /// Early stop once `0 < f(guess) < tolerance`.
    pub tolerance: f64,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            low: 0.01,
            high: 0.50,
            max_iterations: 150,
            tolerance: 1e-10,
        }
    }
}

impl BracketConfig {
    /// Sets the initial bracket.
    #[must_use]
    pub fn with_bracket(mut self, low: f64, high: f64) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Final state of a bracket search.
///
/// The search always produces a best guess; `stopped_early` tells whether the
/// residual tolerance was met before the iteration cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketOutcome {
    /// Best guess: the last evaluated point on an early stop, otherwise the
    /// midpoint of the final bracket.
    pub root: f64,
    /// Number of function evaluations.
    pub iterations: u32,
    /// Function value at the last evaluated guess.
    pub residual: f64,
    /// Final low bound.
    pub low: f64,
    /// Final high bound.
    pub high: f64,
    /// True if `0 < residual < tolerance` ended the search.
    pub stopped_early: bool,
}

/// Narrows `[config.low, config.high]` toward a root of `f`.
///
/// Each iteration evaluates `f` at the current guess. From the second
/// iteration on, the previous value `old` and the current value `new` select the
/// bound that moves to the current guess:
///
/// | Transition | Both negative | Both positive | Otherwise |
/// |------------|---------------|---------------|-----------|
/// | `old < new` | high | low | low |
/// | `old >= new` | high | low | high |
///
/// # Example
///
/// ```rust
/// use accrue_math::solvers::{bracket_search, BracketConfig};
///
/// let f = |r: f64| -100.0 + 60.0 / (1.0 + r) + 60.0 / ((1.0 + r) * (1.0 + r));
/// let outcome = bracket_search(f, &BracketConfig::default());
///
/// assert!(outcome.low <= outcome.root && outcome.root <= outcome.high);
/// assert!(f(outcome.root).abs() < 1e-8);
/// ```
pub fn bracket_search<F>(f: F, config: &BracketConfig) -> BracketOutcome
where
    F: Fn(f64) -> f64,
{
    let mut low = config.low;
    let mut high = config.high;
    let mut guess = low;
    let mut previous: Option<f64> = None;
    let mut value = f64::NAN;
    let mut iterations = 0;

    for _ in 0..config.max_iterations {
        value = f(guess);
        iterations += 1;

        if value > 0.0 && value < config.tolerance {
            return BracketOutcome {
                root: guess,
                iterations,
                residual: value,
                low,
                high,
                stopped_early: true,
            };
        }

        if let Some(old) = previous {
            let both_negative = old < 0.0 && value < 0.0;
            let both_positive = old > 0.0 && value > 0.0;
            if old < value {
                if both_negative {
                    high = guess;
                } else {
                    low = guess;
                }
            } else if both_positive {
                low = guess;
            } else {
                high = guess;
            }
        }
        previous = Some(value);

        guess = (low + high) / 2.0;
    }

    BracketOutcome {
        root: guess,
        iterations,
        residual: value,
        low,
        high,
        stopped_early: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    /// Present value of a 3-period level annuity costing `cost`.
    fn pv(r: f64, cost: f64, payment: f64) -> f64 {
        -cost + (1..=3).map(|t| payment / (1.0 + r).powi(t)).sum::<f64>()
    }

    #[test]
    fn test_finds_root_inside_default_bracket() {
        let f = |r: f64| pv(r, 100.0, 40.0);
        let outcome = bracket_search(f, &BracketConfig::default());

        assert!(f(outcome.root).abs() < 1e-8);
        assert_relative_eq!(outcome.root, 0.0970102574, epsilon = 1e-8);
    }

    #[test]
    fn test_root_stays_within_final_bracket() {
        let f = |r: f64| pv(r, 100.0, 45.0);
        let outcome = bracket_search(f, &BracketConfig::default());

        assert!(outcome.low <= outcome.root);
        assert!(outcome.root <= outcome.high);
        assert!(f(outcome.low) >= f(outcome.root));
        assert!(f(outcome.root) >= f(outcome.high));
    }

    #[test]
    fn test_first_guess_is_low_bound() {
        // Root exactly at the low bound, approached from above
        let f = |r: f64| 1e-11 - (r - 0.01);
        let outcome = bracket_search(f, &BracketConfig::default());

        assert!(outcome.stopped_early);
        assert_eq!(outcome.iterations, 1);
        assert_relative_eq!(outcome.root, 0.01);
    }

    #[test]
    fn test_root_outside_bracket_is_not_found() {
        // Root at 0.8, above the default high bound
        let f = |r: f64| 0.8 - r;
        let outcome = bracket_search(f, &BracketConfig::default());

        assert!(!outcome.stopped_early);
        assert!(outcome.residual.abs() > 0.2);
        assert_relative_eq!(outcome.root, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_iteration_cap() {
        let f = |r: f64| pv(r, 100.0, 40.0);
        let config = BracketConfig::default().with_max_iterations(3);
        let outcome = bracket_search(f, &config);

        assert_eq!(outcome.iterations, 3);
        assert!(!outcome.stopped_early);
    }

    proptest! {
        #[test]
        fn prop_outcome_stays_within_initial_bracket(
            low in -0.9f64..0.4,
            width in 0.01f64..1.0,
            root in -2.0f64..2.0,
            max_iterations in 0u32..200,
        ) {
            let config = BracketConfig::default()
                .with_bracket(low, low + width)
                .with_max_iterations(max_iterations);
            let outcome = bracket_search(|r: f64| root - r, &config);

            prop_assert!(outcome.iterations <= max_iterations);
            prop_assert!(config.low <= outcome.low);
            prop_assert!(outcome.low <= outcome.root);
            prop_assert!(outcome.root <= outcome.high);
            prop_assert!(outcome.high <= config.high);
        }
    }
}
