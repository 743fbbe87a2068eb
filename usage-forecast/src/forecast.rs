//! Next-day forecasts from anomaly-cleaned usage.
//!
//! Both forecasters first drop anomalous readings (see [`crate::anomaly`]) and
//! then average what is left:
//!
//! - **Simple moving average (SMA)**: unweighted mean of the cleaned series
//! - **Weighted moving average (WMA)**: weights `1, 2, ..., n` from oldest to
//!   newest, so recent days count more
//!
//! Results are rounded to two decimal places by default.

use crate::analyzer::UsageAnalyzer;
use crate::error::Result;

/// Unweighted mean of the cleaned series.
pub fn simple_average(clean: &[f64]) -> Option<f64> {
    crate::anomaly::mean(clean)
}

/// Linear weights `1..=len`, oldest reading first.
pub fn linear_weights(len: usize) -> Vec<f64> {
    (1..=len).map(|w| w as f64).collect()
}

/// `Σ(value_i * weight_i) / Σ weight_i` with linear weights.
pub fn weighted_average(clean: &[f64]) -> Option<f64> {
    if clean.is_empty() {
        return None;
    }
    let weights = linear_weights(clean.len());
    let weighted_sum: f64 = clean.iter().zip(&weights).map(|(v, w)| v * w).sum();
    let weight_sum: f64 = weights.iter().sum();
    Some(weighted_sum / weight_sum)
}

/// Rounds to `precision` decimal places, breaking exact ties toward the even
/// digit.
///
/// Values too large to scale already carry no fractional digits and are
/// returned unchanged.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / scale
}

/// Predicts the next day's usage as the mean of the anomaly-free readings.
///
/// ```rust
/// use usage_forecast::forecast_usage_sma;
///
/// let sma = forecast_usage_sma(&[100.0, 120.0, 110.0, 300.0, 125.0, 115.0]).unwrap();
/// assert_eq!(sma, 114.0);
/// ```
pub fn forecast_usage_sma(usage: &[f64]) -> Result<f64> {
    UsageAnalyzer::default().forecast_sma(usage)
}

/// Predicts the next day's usage weighting recent anomaly-free readings more.
///
/// ```rust
/// use usage_forecast::forecast_usage_wma;
///
/// let wma = forecast_usage_wma(&[100.0, 120.0, 110.0, 130.0, 125.0, 115.0, 140.0]).unwrap();
/// assert_eq!(wma, 124.46);
/// ```
pub fn forecast_usage_wma(usage: &[f64]) -> Result<f64> {
    UsageAnalyzer::default().forecast_wma(usage)
}
