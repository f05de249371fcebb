//! Conversions between nominal and effective annual rates.
//!
//! A nominal rate `j` compounded `n` times a year and an effective rate `i` are
//! equivalent when `(1 + j / n)^n = 1 + i`.

use crate::error::{AnalyticsError, AnalyticsResult};

/// Nominal annual rate compounded `periods` times a year equivalent to `effective`.
///
/// `((1 + effective)^(1 / periods) - 1) * periods`
///
/// # Errors
///
/// Returns `AnalyticsError::InvalidParameters` if `effective <= 0` or
/// `periods == 0`.
///
/// # Example
///
/// ```rust
/// use accrue_analytics::yields::nominal_rate;
///
/// let nominal = nominal_rate(0.06, 12).unwrap();
/// assert!((nominal - 0.058411).abs() < 1e-6);
/// ```
pub fn nominal_rate(effective: f64, periods: u32) -> AnalyticsResult<f64> {
    validate(effective, periods)?;
    let n = f64::from(periods);
    Ok(((1.0 + effective).powf(1.0 / n) - 1.0) * n)
}

/// Effective annual rate of `nominal` compounded `periods` times a year.
///
/// `(1 + nominal / periods)^periods - 1`
///
/// # Errors
///
/// Returns `AnalyticsError::InvalidParameters` if `nominal <= 0` or
/// `periods == 0`.
pub fn effective_rate(nominal: f64, periods: u32) -> AnalyticsResult<f64> {
    validate(nominal, periods)?;
    let n = f64::from(periods);
    Ok((1.0 + nominal / n).powf(n) - 1.0)
}

fn validate(rate: f64, periods: u32) -> AnalyticsResult<()> {
    if rate.is_nan() || rate <= 0.0 {
        return Err(AnalyticsError::invalid_parameters(format!(
            "rate must be positive, got {rate}"
        )));
    }
    if periods == 0 {
        return Err(AnalyticsError::invalid_parameters(
            "compounding periods must be positive",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_nominal_reference() {
        assert_relative_eq!(nominal_rate(0.06, 12).unwrap(), 0.058411, epsilon = 1e-6);
    }

    #[test]
    fn test_effective_reference() {
        assert_relative_eq!(
            effective_rate(0.06, 12).unwrap(),
            0.061677812,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_conversions_are_inverse() {
        let effective = effective_rate(0.0725, 4).unwrap();
        assert_relative_eq!(nominal_rate(effective, 4).unwrap(), 0.0725, epsilon = 1e-12);
    }

    #[test]
    fn test_annual_compounding_is_identity() {
        assert_relative_eq!(nominal_rate(0.05, 1).unwrap(), 0.05, epsilon = 1e-15);
        assert_relative_eq!(effective_rate(0.05, 1).unwrap(), 0.05, epsilon = 1e-15);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(nominal_rate(0.0, 12).unwrap_err().is_parameter_error());
        assert!(nominal_rate(-0.01, 12).is_err());
        assert!(effective_rate(0.06, 0).is_err());
        assert!(effective_rate(f64::NAN, 12).is_err());
    }
}
