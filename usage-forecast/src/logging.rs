//! Logging utilities and configuration for usage analysis.
//!
//! The analysis code only emits `tracing` events. This module holds the knobs
//! that shape those events ([`LogConfig`]) and, in [`setup`], the helpers a
//! binary uses to send them to an append-only log file.

use tracing::Level;

/// Default name of the log file written by the report binary.
pub const DEFAULT_LOG_FILE: &str = "forecast_log.txt";

/// Logging configuration for the analyzer.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Base log level for analyzer details
    pub base_level: Level,
    /// Whether forecast log entries list the cleaned input and weights
    pub log_cleaned_input: bool,
    /// Maximum length for logged value lists (to prevent huge logs)
    pub max_field_length: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            base_level: Level::INFO,
            log_cleaned_input: true,
            max_field_length: 256,
        }
    }
}

impl LogConfig {
    /// Creates a verbose configuration suitable for debugging.
    pub fn verbose() -> Self {
        Self {
            base_level: Level::DEBUG,
            log_cleaned_input: true,
            max_field_length: 1024,
        }
    }

    /// Creates a minimal configuration that keeps log lines short.
    pub fn production() -> Self {
        Self {
            base_level: Level::WARN,
            log_cleaned_input: false,
            max_field_length: 128,
        }
    }
}

/// Macro for debug-level analyzer details.
///
/// Expands to `tracing::debug!` guarded by the config's base level, so the
/// fields are only evaluated when the config asks for debug output.
#[macro_export]
macro_rules! log_detail {
    ($config:expr, $($arg:tt)*) => {
        if $config.base_level >= tracing::Level::DEBUG {
            tracing::debug!($($arg)*);
        }
    };
}

/// Truncates a string to the maximum field length if needed.
pub fn truncate_field(value: &str, max_length: usize) -> String {
    if value.len() <= max_length {
        value.to_string()
    } else {
        let mut end = max_length;
        while !value.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...(truncated)", &value[..end])
    }
}

/// Utilities for installing a process-wide log sink.
pub mod setup {
    use std::fs::{File, OpenOptions};
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    use tracing::Level;

    use crate::error::{ForecastError, Result};

    /// Configuration for the process-wide logging setup.
    #[derive(Debug, Clone)]
    pub struct LoggingConfig {
        /// Log level for the application
        pub level: Level,
        /// Log level for this crate specifically
        pub crate_level: Level,
        /// Whether to use JSON output format
        pub json_format: bool,
        /// File the log is appended to; `None` logs to stderr
        pub log_file: Option<PathBuf>,
        /// Environment filter override
        pub env_filter: Option<String>,
    }

    impl Default for LoggingConfig {
        fn default() -> Self {
            Self {
                level: Level::INFO,
                crate_level: Level::INFO,
                json_format: false,
                log_file: Some(PathBuf::from(super::DEFAULT_LOG_FILE)),
                env_filter: None,
            }
        }
    }

    impl LoggingConfig {
        /// Creates a configuration for development use: debug output on stderr.
        pub fn development() -> Self {
            Self {
                level: Level::DEBUG,
                crate_level: Level::DEBUG,
                json_format: false,
                log_file: None,
                env_filter: None,
            }
        }

        /// Creates a configuration for machine-readable JSON lines.
        pub fn structured() -> Self {
            Self {
                json_format: true,
                ..Self::default()
            }
        }

        /// Sets the log level for the application.
        pub fn with_level(mut self, level: Level) -> Self {
            self.level = level;
            self
        }

        /// Sets the log level for this crate.
        pub fn with_crate_level(mut self, level: Level) -> Self {
            self.crate_level = level;
            self
        }

        /// Sets whether to use JSON output format.
        pub fn with_json_format(mut self, enabled: bool) -> Self {
            self.json_format = enabled;
            self
        }

        /// Sets the file to append to, or `None` for stderr.
        pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
            self.log_file = path;
            self
        }

        /// Sets a custom environment filter.
        pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
            self.env_filter = Some(filter.into());
            self
        }

        /// Builds the environment filter string.
        pub fn env_filter(&self) -> String {
            if let Some(ref filter) = self.env_filter {
                filter.clone()
            } else {
                format!(
                    "{},usage_forecast={}",
                    self.level.as_str().to_lowercase(),
                    self.crate_level.as_str().to_lowercase()
                )
            }
        }
    }

    /// Opens `path` for appending, creating it if needed.
    pub fn open_log_file(path: &Path) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| ForecastError::LogFile {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Installs the global subscriber described by `config`.
    ///
    /// Text lines carry a timestamp, the level and the message. `RUST_LOG`
    /// takes precedence over the configured filter. Fails if the log file
    /// cannot be opened or a global subscriber is already installed.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use usage_forecast::logging::setup::{init_logging, LoggingConfig};
    ///
    /// init_logging(LoggingConfig::default()).unwrap();
    /// ```
    pub fn init_logging(config: LoggingConfig) -> Result<()> {
        use tracing_subscriber::fmt::writer::BoxMakeWriter;
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.env_filter()));

        let writer = match config.log_file {
            Some(ref path) => BoxMakeWriter::new(Mutex::new(open_log_file(path)?)),
            None => BoxMakeWriter::new(std::io::stderr),
        };

        let fmt_layer = if config.json_format {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .boxed()
        } else {
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer)
                .boxed()
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| ForecastError::Logging(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::setup::*;
    use super::*;

    #[test]
    fn test_log_config_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.base_level, Level::INFO);
        assert!(config.log_cleaned_input);
        assert_eq!(config.max_field_length, 256);
    }

    #[test]
    fn test_log_config_verbose() {
        let config = LogConfig::verbose();
        assert_eq!(config.base_level, Level::DEBUG);
        assert!(config.log_cleaned_input);
        assert_eq!(config.max_field_length, 1024);
    }

    #[test]
    fn test_log_config_production() {
        let config = LogConfig::production();
        assert_eq!(config.base_level, Level::WARN);
        assert!(!config.log_cleaned_input);
        assert_eq!(config.max_field_length, 128);
    }

    #[test]
    fn test_truncate_field() {
        assert_eq!(truncate_field("[1.0, 2.0]", 20), "[1.0, 2.0]");
        assert_eq!(
            truncate_field("[100.0, 120.0, 110.0]", 6),
            "[100.0...(truncated)"
        );
    }

    #[test]
    fn test_truncate_field_respects_char_boundaries() {
        assert_eq!(truncate_field("ééé", 3), "é...(truncated)");
    }

    #[test]
    fn test_logging_config_env_filter() {
        let config = LoggingConfig::default();
        assert_eq!(config.env_filter(), "info,usage_forecast=info");

        let config = LoggingConfig::default()
            .with_level(Level::WARN)
            .with_crate_level(Level::DEBUG);
        assert_eq!(config.env_filter(), "warn,usage_forecast=debug");

        let config = LoggingConfig::default().with_env_filter("usage_forecast=trace");
        assert_eq!(config.env_filter(), "usage_forecast=trace");
    }

    #[test]
    fn test_logging_config_presets() {
        let config = LoggingConfig::default();
        assert_eq!(
            config.log_file.as_deref(),
            Some(std::path::Path::new(DEFAULT_LOG_FILE))
        );
        assert!(!config.json_format);

        assert!(LoggingConfig::structured().json_format);
        assert!(LoggingConfig::development().log_file.is_none());
    }

    #[test]
    fn test_open_log_file_appends() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_LOG_FILE);

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_open_log_file_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(DEFAULT_LOG_FILE);
        assert!(matches!(
            open_log_file(&path),
            Err(crate::ForecastError::LogFile { .. })
        ));
    }
}
