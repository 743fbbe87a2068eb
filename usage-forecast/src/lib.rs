//! # Usage Forecast - descriptive statistics for daily usage
//!
//! Usage Forecast looks at a short, chronologically ordered series of daily
//! usage readings and answers four questions about it:
//!
//! - **Anomalies**: which readings exceed 1.5 times the series mean?
//! - **Trend**: did usage go up, down, or stay level from the first to the
//!   last day?
//! - **Simple moving average**: what is the mean of the anomaly-free readings?
//! - **Weighted moving average**: the same, with recent days weighted more.
//!
//! The heuristics are deliberately simple. They are meant for quick reports,
//! not statistically validated models.
//!
//! ## Quick Start
//!
//! ```rust
//! use usage_forecast::prelude::*;
//!
//! # fn example() -> usage_forecast::Result<()> {
//! let usage = [100.0, 120.0, 110.0, 130.0, 125.0, 115.0, 140.0];
//!
//! assert!(detect_anomalies(&usage)?.is_empty());
//! assert_eq!(forecast_usage_sma(&usage)?, 120.0);
//! assert_eq!(forecast_usage_wma(&usage)?, 124.46);
//! assert_eq!(analyze_trends(&usage)?, Trend::Increasing);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Logging
//!
//! Every operation emits `tracing` events: an error before an empty-input
//! failure, a warning listing flagged readings, and informational entries for
//! the trend and forecasts. The library never installs a subscriber itself.
//! Binaries call [`logging::setup::init_logging`] to append to a log file;
//! tests can capture events with `tracing::subscriber::with_default`.
//!
//! ## Architecture
//!
//! - **`anomaly`**: mean, threshold and value-based anomaly removal
//! - **`trend`**: the [`Trend`] enum and endpoint comparison
//! - **`forecast`**: simple and weighted averages, rounding
//! - **`analyzer`**: [`UsageAnalyzer`], which adds configuration and logging
//! - **`report`** and **`formatters`**: aggregated results and their output
//! - **`config`**, **`error`**, **`logging`**: the supporting pieces

pub mod analyzer;
pub mod anomaly;
pub mod config;
pub mod error;
pub mod forecast;
pub mod formatters;
pub mod logging;
pub mod prelude;
pub mod report;
pub mod trend;

pub use analyzer::UsageAnalyzer;
pub use anomaly::detect_anomalies;
pub use config::AnalysisConfig;
pub use error::{ForecastError, Result};
pub use forecast::{forecast_usage_sma, forecast_usage_wma};
pub use report::UsageReport;
pub use trend::{analyze_trends, Trend};
