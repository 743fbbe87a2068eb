//! The analyzer that ties detection, trend and forecasting together.
//!
//! [`UsageAnalyzer`] owns the numeric configuration and the logging knobs and
//! emits `tracing` events for every operation. It never installs a subscriber:
//! where those events go is decided by the caller, either process-wide through
//! [`crate::logging::setup::init_logging`] or scoped with
//! `tracing::subscriber::with_default`.

use tracing::{error, info, instrument, warn};

use crate::anomaly::{anomaly_threshold, remove_anomalies, values_above};
use crate::config::AnalysisConfig;
use crate::error::{ForecastError, Result};
use crate::forecast::{linear_weights, round_to, simple_average, weighted_average};
use crate::log_detail;
use crate::logging::{truncate_field, LogConfig};
use crate::report::UsageReport;
use crate::trend::Trend;

/// Runs anomaly detection, trend analysis and forecasts over usage series.
///
/// # Examples
///
/// ```rust
/// use usage_forecast::{AnalysisConfig, Trend, UsageAnalyzer};
///
/// let analyzer = UsageAnalyzer::new(AnalysisConfig::default()).unwrap();
/// let usage = [100.0, 120.0, 110.0, 300.0, 125.0, 115.0];
///
/// assert_eq!(analyzer.detect_anomalies(&usage).unwrap(), vec![300.0]);
/// assert_eq!(analyzer.forecast_sma(&usage).unwrap(), 114.0);
/// assert_eq!(analyzer.analyze_trends(&usage).unwrap(), Trend::Increasing);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UsageAnalyzer {
    config: AnalysisConfig,
    log_config: LogConfig,
}

impl UsageAnalyzer {
    /// Creates an analyzer after validating `config`.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            log_config: LogConfig::default(),
        })
    }

    /// Replaces the logging configuration.
    pub fn with_log_config(mut self, log_config: LogConfig) -> Self {
        self.log_config = log_config;
        self
    }

    /// Returns the analysis configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Returns the logging configuration.
    pub fn log_config(&self) -> &LogConfig {
        &self.log_config
    }

    /// Returns readings strictly above `anomaly_factor * mean`, in order.
    #[instrument(skip(self, usage), fields(readings = usage.len()))]
    pub fn detect_anomalies(&self, usage: &[f64]) -> Result<Vec<f64>> {
        let usage = self.require_readings(usage)?;
        let threshold = anomaly_threshold(usage, self.config.anomaly_factor)
            .ok_or(ForecastError::EmptyInput)?;
        log_detail!(
            self.log_config,
            threshold,
            factor = self.config.anomaly_factor,
            "Computed anomaly threshold"
        );

        let anomalies = values_above(usage, threshold);
        if anomalies.is_empty() {
            info!("No anomalies detected in the data.");
        } else {
            warn!(
                count = anomalies.len(),
                "Anomalies detected with values: {}",
                self.render(&anomalies)
            );
        }
        Ok(anomalies)
    }

    /// Compares the last reading with the first.
    #[instrument(skip(self, usage), fields(readings = usage.len()))]
    pub fn analyze_trends(&self, usage: &[f64]) -> Result<Trend> {
        let trend =
            Trend::of_series(self.require_readings(usage)?).ok_or(ForecastError::EmptyInput)?;
        info!(trend = %trend, "Trend analysis result: {trend}");
        Ok(trend)
    }

    /// Forecasts the next reading as the mean of the anomaly-free readings.
    #[instrument(skip(self, usage), fields(readings = usage.len()))]
    pub fn forecast_sma(&self, usage: &[f64]) -> Result<f64> {
        let clean = self.cleaned(usage)?;
        let sma = simple_average(&clean).ok_or(ForecastError::InsufficientData {
            total: usage.len(),
        })?;

        if self.log_config.log_cleaned_input {
            info!(
                "SMA calculated: {sma:?} based on cleaned input: {}",
                self.render(&clean)
            );
        } else {
            info!(cleaned = clean.len(), "SMA calculated: {sma:?}");
        }
        Ok(round_to(sma, self.config.precision))
    }

    /// Forecasts the next reading as a linearly weighted mean of the
    /// anomaly-free readings, newest weighted highest.
    #[instrument(skip(self, usage), fields(readings = usage.len()))]
    pub fn forecast_wma(&self, usage: &[f64]) -> Result<f64> {
        let clean = self.cleaned(usage)?;
        let wma = weighted_average(&clean).ok_or(ForecastError::InsufficientData {
            total: usage.len(),
        })?;

        if self.log_config.log_cleaned_input {
            info!(
                "WMA calculated: {wma:?} based on cleaned input: {} with weights: {}",
                self.render(&clean),
                self.render(&linear_weights(clean.len()))
            );
        } else {
            info!(cleaned = clean.len(), "WMA calculated: {wma:?}");
        }
        Ok(round_to(wma, self.config.precision))
    }

    /// Runs all four operations in report order.
    pub fn report(&self, usage: &[f64]) -> Result<UsageReport> {
        let anomalies = self.detect_anomalies(usage)?;
        let sma_forecast = self.forecast_sma(usage)?;
        let wma_forecast = self.forecast_wma(usage)?;
        let trend = self.analyze_trends(usage)?;
        Ok(UsageReport::new(
            usage.to_vec(),
            anomalies,
            sma_forecast,
            wma_forecast,
            trend,
        ))
    }

    fn require_readings<'a>(&self, usage: &'a [f64]) -> Result<&'a [f64]> {
        if usage.is_empty() {
            error!("The usage list is empty.");
            return Err(ForecastError::EmptyInput);
        }
        Ok(usage)
    }

    fn cleaned(&self, usage: &[f64]) -> Result<Vec<f64>> {
        let anomalies = self.detect_anomalies(self.require_readings(usage)?)?;
        let clean = remove_anomalies(usage, &anomalies);
        if clean.is_empty() {
            error!(
                readings = usage.len(),
                "Every reading was flagged as an anomaly; nothing left to forecast from."
            );
        }
        Ok(clean)
    }

    fn render(&self, values: &[f64]) -> String {
        truncate_field(&format!("{values:?}"), self.log_config.max_field_length)
    }
}
