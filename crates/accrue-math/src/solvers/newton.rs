//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// The run converges when either the step `|x_{n+1} - x_n|` or the new residual
/// `|f(x_{n+1})|` is within `config.tolerance`. The returned root is the updated
/// iterate `x_{n+1}`.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Errors
///
/// - `MathError::DivisionByZero` if the derivative vanishes at an iterate
/// - `MathError::NonFinite` if an iterate or residual becomes NaN or infinite
/// - `MathError::ConvergenceFailed` if `config.max_iterations` is reached
///
/// # Example
///
/// ```rust
/// use accrue_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;
    let mut fx = f(x);

    for iteration in 0..config.max_iterations {
        let dfx = df(x);

        if dfx == 0.0 {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        let next = x - fx / dfx;
        if !next.is_finite() {
            return Err(MathError::non_finite(iteration, next));
        }

        let f_next = f(next);
        if !f_next.is_finite() {
            return Err(MathError::non_finite(iteration, f_next));
        }

        if (next - x).abs() <= config.tolerance || f_next.abs() <= config.tolerance {
            return Ok(SolverResult {
                root: next,
                iterations: iteration + 1,
                residual: f_next,
            });
        }

        x = next;
        fx = f_next;
    }

    Err(MathError::convergence_failed(config.max_iterations, fx.abs()))
}
