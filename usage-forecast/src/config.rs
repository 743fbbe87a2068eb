//! Tunable parameters for usage analysis.

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// Readings above `DEFAULT_ANOMALY_FACTOR * mean` are flagged as anomalies.
pub const DEFAULT_ANOMALY_FACTOR: f64 = 1.5;

/// Forecasts are rounded to this many decimal places.
pub const DEFAULT_PRECISION: u32 = 2;

/// Largest supported rounding precision.
pub const MAX_PRECISION: u32 = 10;

/// Configuration shared by every analysis operation.
///
/// # Examples
///
/// ```rust
/// use usage_forecast::config::AnalysisConfig;
///
/// let config = AnalysisConfig::default()
///     .with_anomaly_factor(2.0)
///     .with_precision(1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Multiple of the series mean above which a reading is anomalous
    pub anomaly_factor: f64,
    /// Decimal places kept in forecast values
    pub precision: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            anomaly_factor: DEFAULT_ANOMALY_FACTOR,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl AnalysisConfig {
    /// Sets the anomaly factor.
    pub fn with_anomaly_factor(mut self, factor: f64) -> Self {
        self.anomaly_factor = factor;
        self
    }

    /// Sets the rounding precision.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Checks that the factor is finite and positive and the precision is
    /// within range.
    pub fn validate(&self) -> Result<()> {
        if !self.anomaly_factor.is_finite() || self.anomaly_factor <= 0.0 {
            return Err(ForecastError::configuration(format!(
                "anomaly_factor must be finite and positive, got: {}",
                self.anomaly_factor
            )));
        }
        if self.precision > MAX_PRECISION {
            return Err(ForecastError::configuration(format!(
                "precision must be at most {MAX_PRECISION}, got: {}",
                self.precision
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.anomaly_factor, 1.5);
        assert_eq!(config.precision, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_factor() {
        for factor in [0.0, -1.5, f64::NAN, f64::INFINITY] {
            let config = AnalysisConfig::default().with_anomaly_factor(factor);
            assert!(
                matches!(config.validate(), Err(ForecastError::Configuration(_))),
                "factor {factor} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_excessive_precision() {
        let config = AnalysisConfig::default().with_precision(MAX_PRECISION + 1);
        assert!(config.validate().is_err());
        let config = AnalysisConfig::default().with_precision(MAX_PRECISION);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serde_roundtrip_keeps_fields() {
        let json = serde_json::to_string(&AnalysisConfig::default()).unwrap();
        assert_eq!(json, r#"{"anomaly_factor":1.5,"precision":2}"#);
    }
}
