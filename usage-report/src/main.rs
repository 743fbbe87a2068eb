//! Usage Report
//!
//! Prints anomalies, moving-average forecasts and the trend for a series of
//! daily usage readings. Without readings on the command line the bundled
//! sample week is analyzed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::Level;
use usage_forecast::formatters::{
    FormatterConfig, HumanFormatter, JsonFormatter, MarkdownFormatter, ReportFormatter,
};
use usage_forecast::logging::setup::{init_logging, LoggingConfig};
use usage_forecast::logging::DEFAULT_LOG_FILE;
use usage_forecast::report::SAMPLE_DAILY_USAGE;
use usage_forecast::{AnalysisConfig, UsageAnalyzer};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Daily usage readings, oldest first
    #[arg(value_name = "USAGE", allow_negative_numbers = true)]
    usage: Vec<f64>,

    /// File the log is appended to
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Log to stderr instead of a file
    #[arg(long, conflicts_with = "log_file")]
    no_log_file: bool,

    /// Write log lines as JSON
    #[arg(long)]
    json_logs: bool,

    /// Minimum level written to the log
    #[arg(long, default_value = "info")]
    log_level: Level,

    /// Readings above this multiple of the mean are anomalies
    #[arg(long, default_value_t = usage_forecast::config::DEFAULT_ANOMALY_FACTOR)]
    anomaly_factor: f64,

    /// Decimal places kept in forecasts
    #[arg(long, default_value_t = usage_forecast::config::DEFAULT_PRECISION)]
    precision: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Include the readings and a timestamp in the output
    #[arg(long)]
    detailed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
    Markdown,
}

impl Args {
    fn logging_config(&self) -> LoggingConfig {
        let log_file = (!self.no_log_file).then(|| self.log_file.clone());
        LoggingConfig::default()
            .with_level(self.log_level)
            .with_crate_level(self.log_level)
            .with_json_format(self.json_logs)
            .with_log_file(log_file)
    }

    fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::default()
            .with_anomaly_factor(self.anomaly_factor)
            .with_precision(self.precision)
    }

    fn readings(&self) -> &[f64] {
        if self.usage.is_empty() {
            &SAMPLE_DAILY_USAGE
        } else {
            &self.usage
        }
    }

    fn formatter(&self) -> Box<dyn ReportFormatter> {
        let config = FormatterConfig::default()
            .with_usage(self.detailed)
            .with_timestamp(self.detailed);
        match self.format {
            OutputFormat::Human => Box::new(HumanFormatter::with_config(config)),
            OutputFormat::Json => Box::new(JsonFormatter::with_config(config)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::with_config(config)),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.logging_config()).context("failed to initialize logging")?;

    let output = run(&args)?;
    print!("{output}");
    Ok(())
}

fn run(args: &Args) -> Result<String> {
    let analyzer = UsageAnalyzer::new(args.analysis_config())?;
    let readings = args.readings();
    let config = analyzer.config();
    tracing::info!(
        readings = readings.len(),
        anomaly_factor = config.anomaly_factor,
        precision = config.precision,
        "Starting usage report"
    );

    let report = analyzer
        .report(readings)
        .context("usage analysis failed")?;
    let output = args.formatter().format(&report)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("usage-report").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(args.usage.is_empty());
        assert_eq!(args.readings(), &SAMPLE_DAILY_USAGE);
        assert_eq!(args.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(args.format, OutputFormat::Human);
        assert_eq!(args.analysis_config(), AnalysisConfig::default());

        let logging = args.logging_config();
        assert_eq!(logging.log_file, Some(PathBuf::from(DEFAULT_LOG_FILE)));
        assert_eq!(logging.level, Level::INFO);
    }

    #[test]
    fn test_readings_and_negative_numbers() {
        let args = parse(&["100", "-1.5", "120"]);
        assert_eq!(args.readings(), &[100.0, -1.5, 120.0]);
    }

    #[test]
    fn test_no_log_file_logs_to_stderr() {
        let args = parse(&["--no-log-file", "--log-level", "debug"]);
        let logging = args.logging_config();
        assert!(logging.log_file.is_none());
        assert_eq!(logging.crate_level, Level::DEBUG);
    }

    #[test]
    fn test_no_log_file_conflicts_with_log_file() {
        let result = Args::try_parse_from(["usage-report", "--no-log-file", "--log-file", "x.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_sample_week() {
        let output = run(&parse(&[])).unwrap();
        assert_eq!(
            output,
            "Anomalies detected with values: []\n\
             Simple Moving Average Forecast: 120.0\n\
             Weighted Moving Average Forecast: 124.46\n\
             Trend Analysis: increasing\n"
        );
    }

    #[test]
    fn test_run_with_spike_as_json() {
        let output = run(&parse(&[
            "--format", "json", "100", "120", "110", "300", "125", "115",
        ]))
        .unwrap();
        assert!(output.contains("\"sma_forecast\": 114.0"));
        assert!(output.contains("\"trend\": \"increasing\""));
        assert!(!output.contains("generated_at"));
    }

    #[test]
    fn test_run_detailed_includes_usage_and_timestamp() {
        let output = run(&parse(&["--detailed", "100", "120"])).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Generated at: "));
        assert_eq!(lines[1], "Daily usage: [100.0, 120.0]");
    }

    #[test]
    fn test_run_rejects_invalid_factor() {
        let err = run(&parse(&["--anomaly-factor", "0"])).unwrap_err();
        assert!(err.to_string().contains("anomaly_factor"));
    }

    #[test]
    fn test_run_reports_fully_flagged_series() {
        let err = run(&parse(&["--", "-1", "-1"])).unwrap_err();
        assert!(format!("{err:#}").contains("Insufficient data"));
    }
}
