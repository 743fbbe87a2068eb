//! Prelude for commonly used types and functions in usage-forecast.

pub use crate::analyzer::UsageAnalyzer;
pub use crate::anomaly::detect_anomalies;
pub use crate::config::AnalysisConfig;
pub use crate::error::{ForecastError, Result};
pub use crate::formatters::{FormatterConfig, HumanFormatter, JsonFormatter, ReportFormatter};
pub use crate::forecast::{forecast_usage_sma, forecast_usage_wma};
pub use crate::logging::LogConfig;
pub use crate::report::UsageReport;
pub use crate::trend::{analyze_trends, Trend};
