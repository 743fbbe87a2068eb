//! Trend direction from the first and last readings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::analyzer::UsageAnalyzer;
use crate::error::Result;

/// Direction of a usage series.
///
/// Only the endpoints are compared; intermediate readings never change the
/// outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Last reading is above the first
    Increasing,
    /// Last reading is below the first
    Decreasing,
    /// Last reading equals the first
    Stable,
}

impl Trend {
    /// Classifies the change from `first` to `last`.
    pub fn between(first: f64, last: f64) -> Self {
        if last > first {
            Trend::Increasing
        } else if last < first {
            Trend::Decreasing
        } else {
            Trend::Stable
        }
    }

    /// Classifies a series by its endpoints, or `None` when it is empty.
    pub fn of_series(usage: &[f64]) -> Option<Self> {
        match (usage.first(), usage.last()) {
            (Some(&first), Some(&last)) => Some(Self::between(first, last)),
            _ => None,
        }
    }

    /// Returns the label used in reports and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reports whether usage went up, down, or stayed level between the first and
/// last day.
///
/// ```rust
/// use usage_forecast::{analyze_trends, Trend};
///
/// let trend = analyze_trends(&[100.0, 120.0, 110.0, 130.0, 125.0, 115.0, 140.0]).unwrap();
/// assert_eq!(trend, Trend::Increasing);
/// assert_eq!(trend.to_string(), "increasing");
/// ```
pub fn analyze_trends(usage: &[f64]) -> Result<Trend> {
    UsageAnalyzer::default().analyze_trends(usage)
}
