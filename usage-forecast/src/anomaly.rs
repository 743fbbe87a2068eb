//! Threshold-based anomaly flagging.
//!
//! A reading is anomalous when it is strictly greater than a fixed multiple of
//! the arithmetic mean of the whole series. With the default factor of 1.5 the
//! series `[100, 120, 110, 300, 125, 115]` has a mean of 145 and a threshold of
//! 217.5, so only `300` is flagged.
//!
//! Removal of anomalies before forecasting is value-based: every reading equal
//! to a flagged value is dropped, including duplicates that sit at other
//! positions.

use crate::analyzer::UsageAnalyzer;
use crate::error::Result;

/// Arithmetic mean of the series, or `None` when it is empty.
pub fn mean(usage: &[f64]) -> Option<f64> {
    if usage.is_empty() {
        None
    } else {
        Some(usage.iter().sum::<f64>() / usage.len() as f64)
    }
}

/// Threshold above which readings are flagged: `factor * mean(usage)`.
pub fn anomaly_threshold(usage: &[f64], factor: f64) -> Option<f64> {
    mean(usage).map(|m| factor * m)
}

/// Returns the readings strictly above `threshold`, in their original order.
pub fn values_above(usage: &[f64], threshold: f64) -> Vec<f64> {
    usage.iter().copied().filter(|&v| v > threshold).collect()
}

/// Drops every reading whose value matches one of `anomalies`.
pub fn remove_anomalies(usage: &[f64], anomalies: &[f64]) -> Vec<f64> {
    usage
        .iter()
        .copied()
        .filter(|v| !anomalies.contains(v))
        .collect()
}

/// Flags readings above 1.5 times the series mean.
///
/// Logs a warning listing the flagged values, or an informational entry when
/// there are none. Fails with [`ForecastError::EmptyInput`](crate::ForecastError::EmptyInput)
/// on an empty series.
///
/// ```rust
/// use usage_forecast::detect_anomalies;
///
/// let anomalies = detect_anomalies(&[100.0, 120.0, 110.0, 300.0, 125.0, 115.0]).unwrap();
/// assert_eq!(anomalies, vec![300.0]);
/// ```
pub fn detect_anomalies(usage: &[f64]) -> Result<Vec<f64>> {
    UsageAnalyzer::default().detect_anomalies(usage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ForecastError;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[4.0]), Some(4.0));
        assert_eq!(mean(&[100.0, 120.0, 110.0, 300.0, 125.0, 115.0]), Some(145.0));
    }

    #[test]
    fn test_threshold() {
        let usage = [100.0, 120.0, 110.0, 300.0, 125.0, 115.0];
        assert_eq!(anomaly_threshold(&usage, 1.5), Some(217.5));
        assert_eq!(anomaly_threshold(&[], 1.5), None);
    }

    #[test]
    fn test_values_above_is_strict() {
        let usage = [10.0, 15.0, 20.0, 15.0];
        assert_eq!(values_above(&usage, 15.0), vec![20.0]);
    }

    #[test]
    fn test_remove_anomalies_by_value() {
        let usage = [100.0, 400.0, 110.0, 400.0, 120.0];
        assert_eq!(remove_anomalies(&usage, &[400.0]), vec![100.0, 110.0, 120.0]);
    }

    #[test]
    fn test_remove_anomalies_nothing_flagged() {
        let usage = [1.0, 2.0, 3.0];
        assert_eq!(remove_anomalies(&usage, &[]), usage.to_vec());
    }

    #[test]
    fn test_detect_anomalies_sample_week() {
        let usage = [100.0, 120.0, 110.0, 130.0, 125.0, 115.0, 140.0];
        assert!(detect_anomalies(&usage).unwrap().is_empty());
    }

    #[test]
    fn test_detect_anomalies_preserves_order() {
        let usage = [900.0, 10.0, 10.0, 800.0, 10.0, 10.0, 10.0, 10.0];
        assert_eq!(detect_anomalies(&usage).unwrap(), vec![900.0, 800.0]);
    }

    #[test]
    fn test_detect_anomalies_empty() {
        assert!(matches!(
            detect_anomalies(&[]),
            Err(ForecastError::EmptyInput)
        ));
    }
}
