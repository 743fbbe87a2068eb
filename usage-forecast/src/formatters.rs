//! Report formatting for usage analysis results.
//!
//! [`HumanFormatter`] prints the four labeled lines of the classic report,
//! [`JsonFormatter`] emits the report as JSON for other tools, and
//! [`MarkdownFormatter`] renders a small table for documents.
//!
//! # Examples
//!
//! ```rust
//! use usage_forecast::formatters::{HumanFormatter, ReportFormatter};
//! use usage_forecast::UsageAnalyzer;
//!
//! let report = UsageAnalyzer::default()
//!     .report(&[100.0, 120.0, 110.0, 300.0, 125.0, 115.0])
//!     .unwrap();
//! let output = HumanFormatter::new().format(&report).unwrap();
//! assert!(output.starts_with("Anomalies detected with values: [300.0]"));
//! ```

use crate::error::Result;
use crate::report::UsageReport;

/// Configuration options for formatting reports.
#[derive(Debug, Clone, Default)]
pub struct FormatterConfig {
    /// Include the analyzed readings
    pub include_usage: bool,
    /// Include the generation timestamp
    pub include_timestamp: bool,
}

impl FormatterConfig {
    /// Creates a configuration showing everything.
    pub fn detailed() -> Self {
        Self {
            include_usage: true,
            include_timestamp: true,
        }
    }

    /// Sets whether to include the analyzed readings.
    pub fn with_usage(mut self, include: bool) -> Self {
        self.include_usage = include;
        self
    }

    /// Sets whether to include the generation timestamp.
    pub fn with_timestamp(mut self, include: bool) -> Self {
        self.include_timestamp = include;
        self
    }
}

/// Trait for turning a [`UsageReport`] into text.
pub trait ReportFormatter {
    /// Formats a report using the formatter's own configuration.
    fn format(&self, report: &UsageReport) -> Result<String>;

    /// Formats a report with an explicit configuration.
    fn format_with_config(&self, report: &UsageReport, _config: &FormatterConfig) -> Result<String> {
        self.format(report)
    }
}

/// Formats reports as structured JSON.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    config: FormatterConfig,
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a pretty-printing JSON formatter that includes every field.
    pub fn new() -> Self {
        Self {
            config: FormatterConfig::detailed(),
            pretty: true,
        }
    }

    /// Creates a JSON formatter with the specified configuration.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self {
            config,
            pretty: true,
        }
    }

    /// Sets whether to use pretty-printed JSON.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &UsageReport) -> Result<String> {
        self.format_with_config(report, &self.config)
    }

    fn format_with_config(&self, report: &UsageReport, config: &FormatterConfig) -> Result<String> {
        let mut value = serde_json::to_value(report)?;
        if let Some(object) = value.as_object_mut() {
            if !config.include_usage {
                object.remove("usage");
            }
            if !config.include_timestamp {
                object.remove("generated_at");
            }
        }

        let output = if self.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(output)
    }
}

/// Formats reports as the four labeled console lines.
#[derive(Debug, Clone, Default)]
pub struct HumanFormatter {
    config: FormatterConfig,
}

impl HumanFormatter {
    /// Creates a human formatter printing only the four result lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a human formatter with the specified configuration.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format(&self, report: &UsageReport) -> Result<String> {
        self.format_with_config(report, &self.config)
    }

    fn format_with_config(&self, report: &UsageReport, config: &FormatterConfig) -> Result<String> {
        let mut lines = Vec::with_capacity(6);
        if config.include_timestamp {
            lines.push(format!("Generated at: {}", report.generated_at));
        }
        if config.include_usage {
            lines.push(format!("Daily usage: {:?}", report.usage));
        }
        lines.push(format!(
            "Anomalies detected with values: {:?}",
            report.anomalies
        ));
        lines.push(format!(
            "Simple Moving Average Forecast: {:?}",
            report.sma_forecast
        ));
        lines.push(format!(
            "Weighted Moving Average Forecast: {:?}",
            report.wma_forecast
        ));
        lines.push(format!("Trend Analysis: {}", report.trend));

        let mut output = lines.join("\n");
        output.push('\n');
        Ok(output)
    }
}

/// Formats reports as a Markdown table.
#[derive(Debug, Clone)]
pub struct MarkdownFormatter {
    config: FormatterConfig,
    heading_level: u8,
}

impl MarkdownFormatter {
    /// Creates a Markdown formatter with a level-2 heading.
    pub fn new() -> Self {
        Self {
            config: FormatterConfig::default(),
            heading_level: 2,
        }
    }

    /// Creates a Markdown formatter with the specified configuration.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self {
            config,
            heading_level: 2,
        }
    }

    /// Sets the heading level (clamped to 1..=6).
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.heading_level = level.clamp(1, 6);
        self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &UsageReport) -> Result<String> {
        self.format_with_config(report, &self.config)
    }

    fn format_with_config(&self, report: &UsageReport, config: &FormatterConfig) -> Result<String> {
        let heading = "#".repeat(self.heading_level as usize);
        let mut output = format!("{heading} Usage Forecast Report\n\n");

        if config.include_timestamp {
            output.push_str(&format!("**Generated:** {}\n\n", report.generated_at));
        }
        if config.include_usage {
            output.push_str(&format!("**Daily usage:** {:?}\n\n", report.usage));
        }

        output.push_str("| Metric | Value |\n|--------|-------|\n");
        output.push_str(&format!("| Anomalies | {:?} |\n", report.anomalies));
        output.push_str(&format!("| SMA forecast | {:?} |\n", report.sma_forecast));
        output.push_str(&format!("| WMA forecast | {:?} |\n", report.wma_forecast));
        output.push_str(&format!("| Trend | {} |\n", report.trend));
        Ok(output)
    }
}
