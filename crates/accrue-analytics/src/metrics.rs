//! Batch evaluation of many cash-flow series.
//!
//! Each series is solved independently, so a failure is recorded against that
//! series and never aborts the batch. With the `parallel` feature enabled, batches
//! at or above [`MetricsConfig::parallel_threshold`] are evaluated with rayon.

use log::warn;
use serde::{Deserialize, Serialize};

use accrue_core::CashFlowSeries;

use crate::rates::{XirrConfig, XirrSolver};
use crate::valuation::xnpv;

/// Configuration for [`evaluate_series_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Enable parallel processing (requires the `parallel` feature).
    pub parallel: bool,
    /// Minimum number of series to trigger parallel processing.
    pub parallel_threshold: usize,
    /// Solver settings used for every XIRR.
    pub xirr: XirrConfig,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 64,
            xirr: XirrConfig::default(),
        }
    }
}

impl MetricsConfig {
    /// Creates a configuration that never uses parallel processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}

/// Metrics of one series in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesMetrics {
    /// Position of the series in the input slice.
    pub index: usize,
    /// XIRR, or `None` if it could not be computed.
    pub xirr: Option<f64>,
    /// XNPV at the batch rate, or `None` if it could not be computed.
    pub xnpv: Option<f64>,
}

/// Computes XIRR and XNPV at `rate` for every series, with the default configuration.
///
/// Results are returned in input order.
#[must_use]
pub fn evaluate_series(series: &[CashFlowSeries], rate: f64) -> Vec<SeriesMetrics> {
    evaluate_series_with(series, rate, &MetricsConfig::default())
}

/// Computes XIRR and XNPV at `rate` for every series.
///
/// Results are returned in input order whether or not the batch runs in parallel.
#[must_use]
pub fn evaluate_series_with(
    series: &[CashFlowSeries],
    rate: f64,
    config: &MetricsConfig,
) -> Vec<SeriesMetrics> {
    let solver = XirrSolver::new().with_config(config.xirr);
    let indexed: Vec<(usize, &CashFlowSeries)> = series.iter().enumerate().collect();

    maybe_parallel_map(&indexed, config, |&(index, s)| {
        let xirr = solver
            .solve(s)
            .map_err(|err| warn!("series {index}: xirr failed: {err}"))
            .ok()
            .map(|result| result.rate);
        let xnpv = xnpv(rate, s)
            .map_err(|err| warn!("series {index}: xnpv failed: {err}"))
            .ok();

        SeriesMetrics { index, xirr, xnpv }
    })
}

#[allow(unused_variables)]
fn maybe_parallel_map<T, U, F>(items: &[T], config: &MetricsConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use accrue_core::{CashFlow, Date};
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn batch() -> Vec<CashFlowSeries> {
        let start = date(2000, 5, 15);
        let income = date(2000, 6, 20);
        vec![
            CashFlowSeries::monthly(-100_000.0, start, 36, 4_000.0, income),
            // Too short for XIRR, long enough for XNPV
            CashFlowSeries::new(vec![
                CashFlow::new(start, -100.0),
                CashFlow::new(income, 110.0),
            ]),
            CashFlowSeries::monthly(-100_000.0, start, 36, 6_000.0, income),
            CashFlowSeries::default(),
        ]
    }

    #[test]
    fn test_batch_records_failures_per_series() {
        let metrics = evaluate_series(&batch(), 0.04);

        assert_eq!(metrics.len(), 4);
        assert_relative_eq!(metrics[0].xirr.unwrap(), 0.2826335, epsilon = 1e-7);
        assert_relative_eq!(metrics[0].xnpv.unwrap(), 35543.5544, epsilon = 1e-3);

        assert!(metrics[1].xirr.is_none());
        assert!(metrics[1].xnpv.is_some());

        assert_relative_eq!(metrics[2].xirr.unwrap(), 0.769936717, epsilon = 1e-8);

        assert!(metrics[3].xirr.is_none());
        assert!(metrics[3].xnpv.is_none());
    }

    #[test]
    fn test_results_keep_input_order() {
        let series: Vec<_> = batch().into_iter().cycle().take(200).collect();
        let sequential = evaluate_series_with(&series, 0.04, &MetricsConfig::sequential());
        let parallel =
            evaluate_series_with(&series, 0.04, &MetricsConfig::default().with_parallel_threshold(1));

        assert_eq!(sequential, parallel);
        for (i, m) in parallel.iter().enumerate() {
            assert_eq!(m.index, i);
        }
    }

    #[test]
    fn test_should_parallelize() {
        let config = MetricsConfig::default();

        #[cfg(feature = "parallel")]
        {
            assert!(!config.should_parallelize(10));
            assert!(config.should_parallelize(64));
        }
        #[cfg(not(feature = "parallel"))]
        assert!(!config.should_parallelize(1_000));

        assert!(!MetricsConfig::sequential().should_parallelize(1_000));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: MetricsConfig = serde_json::from_str(r#"{"parallel": false}"#).unwrap();
        assert!(!config.parallel);
        assert_eq!(config.parallel_threshold, 64);
    }
}
