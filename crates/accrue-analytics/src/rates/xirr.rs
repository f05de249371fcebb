//! Internal rate of return of dated, irregular cash flows.
//!
//! XIRR is the annual rate at which the dated value of a series is zero:
//!
//! $$\sum_i \frac{V_i}{(1 + r)^{(d_i - d_0) / 365}} = 0$$
//!
//! The root is found with Newton-Raphson using the analytic derivative. When a run
//! from the preferred seed fails, the solver restarts from an evenly spaced sweep
//! of seeds over `(-1, 1)`, so the result depends only on the input.

use log::debug;
use serde::{Deserialize, Serialize};

use accrue_core::daycounts::{Act365Fixed, DayCount};
use accrue_core::CashFlowSeries;
use accrue_math::solvers::{newton_with_restarts, RestartSchedule, SolverConfig};
use accrue_math::MathError;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::valuation::{value_at_rate, value_derivative_at_rate};

/// Minimum number of entries for XIRR.
pub const MIN_XIRR_CASH_FLOWS: usize = 3;

/// Tuning of the XIRR solver.
///
/// Defaults: tolerance `1e-10`, 50 Newton iterations per attempt, seed `0.1` then
/// `-0.99` to `0.99` in steps of `0.01` (200 attempts).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XirrConfig {
    /// Newton-Raphson settings for each attempt.
    pub solver: SolverConfig,
    /// Seed schedule across attempts.
    pub schedule: RestartSchedule,
}

/// A converged XIRR.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XirrResult {
    /// Annual rate as a decimal (0.05 for 5%).
    pub rate: f64,
    /// Newton iterations of the converged attempt.
    pub iterations: u32,
    /// Attempts used, the converged one included.
    pub attempts: u32,
    /// Dated value of the series at `rate`.
    pub residual: f64,
}

/// XIRR solver.
///
/// # Example
///
/// ```rust
/// use accrue_analytics::rates::XirrSolver;
/// use accrue_core::{CashFlowSeries, Date};
///
/// let series = CashFlowSeries::monthly(
///     -100_000.0,
///     Date::parse("2000-05-15").unwrap(),
///     36,
///     4_000.0,
///     Date::parse("2000-06-20").unwrap(),
/// );
///
/// let result = XirrSolver::new().solve(&series).unwrap();
/// assert!((result.rate - 0.2826335).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XirrSolver<D: DayCount = Act365Fixed> {
    config: XirrConfig,
    day_count: D,
}

impl Default for XirrSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl XirrSolver {
    /// Creates a solver with the default configuration and Actual/365 Fixed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: XirrConfig::default(),
            day_count: Act365Fixed,
        }
    }
}

impl<D: DayCount> XirrSolver<D> {
    /// Replaces the whole configuration.
    #[must_use]
    pub fn with_config(mut self, config: XirrConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the Newton-Raphson tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config.solver = self.config.solver.with_tolerance(tolerance);
        self
    }

    /// Sets the Newton-Raphson iteration cap per attempt.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config.solver = self.config.solver.with_max_iterations(max_iterations);
        self
    }

    /// Sets the seed of the first attempt.
    #[must_use]
    pub fn with_initial_guess(mut self, guess: f64) -> Self {
        self.config.schedule = self.config.schedule.with_initial_guess(guess);
        self
    }

    /// Discounts with another day count convention.
    #[must_use]
    pub fn with_day_count<E: DayCount>(self, day_count: E) -> XirrSolver<E> {
        XirrSolver {
            config: self.config,
            day_count,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &XirrConfig {
        &self.config
    }

    /// Solves for the rate at which the dated value of `series` is zero.
    ///
    /// # Errors
    ///
    /// - `AnalyticsError::InsufficientCashFlows` for fewer than three entries
    /// - `AnalyticsError::InvalidData` if an amount is not finite
    /// - `AnalyticsError::SolverConvergenceFailed` if no seed converges
    pub fn solve(&self, series: &CashFlowSeries) -> AnalyticsResult<XirrResult> {
        if series.len() < MIN_XIRR_CASH_FLOWS {
            return Err(AnalyticsError::insufficient_cash_flows(
                MIN_XIRR_CASH_FLOWS,
                series.len(),
            ));
        }
        series.ensure_finite()?;

        let f = |rate: f64| value_at_rate(series, rate, &self.day_count);
        let df = |rate: f64| value_derivative_at_rate(series, rate, &self.day_count);

        let outcome = newton_with_restarts(f, df, &self.config.schedule, &self.config.solver)
            .map_err(|err| match err {
                MathError::RestartsExhausted { attempts, residual } => {
                    AnalyticsError::convergence_failed("xirr", attempts, residual)
                }
                other => AnalyticsError::from(other),
            })?;

        let result = XirrResult {
            rate: outcome.solution.root,
            iterations: outcome.solution.iterations,
            attempts: outcome.attempt + 1,
            residual: outcome.solution.residual,
        };
        debug!(
            "xirr over {} flows ({}): {:.10} after {} attempts",
            series.len(),
            self.day_count.name(),
            result.rate,
            result.attempts
        );

        Ok(result)
    }
}

/// XIRR of `series` with the default solver.
///
/// # Errors
///
/// See [`XirrSolver::solve`].
pub fn xirr(series: &CashFlowSeries) -> AnalyticsResult<f64> {
    XirrSolver::new().solve(series).map(|result| result.rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use accrue_core::{CashFlow, Date};
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn scenario(anchor: f64, income: f64, months: u32) -> CashFlowSeries {
        CashFlowSeries::monthly(anchor, date(2000, 5, 15), months, income, date(2000, 6, 20))
    }

    #[test]
    fn test_reference_scenarios() {
        assert_relative_eq!(
            xirr(&scenario(-100_000.0, 4_000.0, 36)).unwrap(),
            0.2826335,
            epsilon = 1e-7
        );
        assert_relative_eq!(
            xirr(&scenario(-100_000.0, 6_000.0, 36)).unwrap(),
            0.769936717,
            epsilon = 1e-8
        );
        assert_relative_eq!(
            xirr(&scenario(-20_000.0, 1247.6957453033, 18)).unwrap(),
            0.15719098,
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_result_details() {
        let series = scenario(-100_000.0, 4_000.0, 36);
        let result = XirrSolver::new().solve(&series).unwrap();

        assert_eq!(result.attempts, 1);
        assert!(result.iterations <= 50);
        assert!(result.residual.abs() < 1e-8);
        assert!(value_at_rate(&series, result.rate, &Act365Fixed).abs() < 1e-8);
    }

    #[test]
    fn test_two_entries_is_parameter_error() {
        let series = CashFlowSeries::new(vec![
            CashFlow::new(date(2020, 1, 1), -100.0),
            CashFlow::new(date(2021, 1, 1), 110.0),
        ]);
        let err = xirr(&series).unwrap_err();
        assert!(err.is_parameter_error());
        assert_eq!(err, AnalyticsError::insufficient_cash_flows(3, 2));
    }

    #[test]
    fn test_no_sign_change_is_calculation_error() {
        let series = CashFlowSeries::monthly(100.0, date(2020, 1, 1), 12, 10.0, date(2020, 2, 1));
        let err = xirr(&series).unwrap_err();
        assert!(err.is_calculation_error());
        assert!(matches!(
            err,
            AnalyticsError::SolverConvergenceFailed { iterations: 200, .. }
        ));
    }

    #[test]
    fn test_non_finite_amount_is_rejected() {
        let series = CashFlowSeries::new(vec![
            CashFlow::new(date(2020, 1, 1), -100.0),
            CashFlow::new(date(2020, 6, 1), f64::NAN),
            CashFlow::new(date(2021, 1, 1), 110.0),
        ]);
        assert!(xirr(&series).unwrap_err().is_parameter_error());
    }

    #[test]
    fn test_bad_initial_guess_recovers_through_scan() {
        let series = scenario(-100_000.0, 4_000.0, 36);
        let result = XirrSolver::new()
            .with_initial_guess(-1.0)
            .solve(&series)
            .unwrap();

        assert!(result.attempts > 1);
        assert!(value_at_rate(&series, result.rate, &Act365Fixed).abs() < 1e-8);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: XirrConfig =
            serde_json::from_str(r#"{"solver": {"max_iterations": 80}}"#).unwrap();
        assert_eq!(config.solver.max_iterations, 80);
        assert_relative_eq!(config.solver.tolerance, 1e-10);
        assert_eq!(config.schedule.attempts, 200);

        let solver = XirrSolver::new().with_config(config);
        assert_eq!(solver.config().solver.max_iterations, 80);
    }
}
