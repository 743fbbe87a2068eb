//! Error types for the usage forecast library.
//!
//! All fallible operations in this crate return [`Result`], whose error side is
//! the [`ForecastError`] enum. Empty input is always surfaced to the caller and
//! is never recovered from silently.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for the usage forecast library.
#[derive(Error, Debug)]
pub enum ForecastError {
    /// An operation received an empty usage series.
    #[error("The usage list is empty. Please provide valid data.")]
    EmptyInput,

    /// Every reading was flagged as an anomaly, leaving nothing to average.
    #[error("Insufficient data: all {total} readings were flagged as anomalies")]
    InsufficientData {
        /// Number of readings in the original series
        total: usize,
    },

    /// Error related to analysis or logging configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The log file could not be opened for appending.
    #[error("Failed to open log file '{}': {source}", path.display())]
    LogFile {
        /// Path that was being opened
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A global tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// Error from serialization operations.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// A type alias for `Result<T, ForecastError>`.
pub type Result<T> = std::result::Result<T, ForecastError>;

impl ForecastError {
    /// Creates a configuration error with the given message.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Returns true for errors caused by the shape of the input series rather
    /// than by the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::InsufficientData { .. })
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_empty_input_display() {
        let err = ForecastError::EmptyInput;
        assert_eq!(
            err.to_string(),
            "The usage list is empty. Please provide valid data."
        );
    }

    #[test]
    fn test_insufficient_data_display() {
        let err = ForecastError::InsufficientData { total: 2 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: all 2 readings were flagged as anomalies"
        );
    }

    #[test]
    fn test_log_file_error_keeps_source() {
        let err = ForecastError::LogFile {
            path: PathBuf::from("/nonexistent/forecast_log.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/nonexistent/forecast_log.txt"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_input_error() {
        assert!(ForecastError::EmptyInput.is_input_error());
        assert!(ForecastError::InsufficientData { total: 3 }.is_input_error());
        assert!(!ForecastError::configuration("bad factor").is_input_error());
    }

    #[test]
    fn test_serde_json_conversion() {
        let parse_err = serde_json::from_str::<f64>("not a number").unwrap_err();
        let err: ForecastError = parse_err.into();
        assert!(matches!(err, ForecastError::Serialization(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ForecastError>();
    }
}
