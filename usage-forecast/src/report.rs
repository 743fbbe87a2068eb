//! Aggregated analysis results for one usage series.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::trend::Trend;

/// Readings used when no series is supplied: one week of daily usage.
pub const SAMPLE_DAILY_USAGE: [f64; 7] = [100.0, 120.0, 110.0, 130.0, 125.0, 115.0, 140.0];

/// Everything the report binary prints for a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageReport {
    /// The analyzed readings, oldest first
    pub usage: Vec<f64>,
    /// Readings flagged as anomalies, in series order
    pub anomalies: Vec<f64>,
    /// Simple moving average forecast
    pub sma_forecast: f64,
    /// Weighted moving average forecast
    pub wma_forecast: f64,
    /// Direction from the first to the last reading
    pub trend: Trend,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
}

impl UsageReport {
    /// Creates a report stamped with the current time.
    pub fn new(
        usage: Vec<f64>,
        anomalies: Vec<f64>,
        sma_forecast: f64,
        wma_forecast: f64,
        trend: Trend,
    ) -> Self {
        Self {
            usage,
            anomalies,
            sma_forecast,
            wma_forecast,
            trend,
            generated_at: Utc::now(),
        }
    }

    /// Returns true when at least one reading was flagged.
    pub fn has_anomalies(&self) -> bool {
        !self.anomalies.is_empty()
    }
}
