//! Report formatting for verification results.
//!
//! Two formatters cover the harness's needs: a human-readable one for
//! terminals and a JSON one for programmatic consumption.

use std::fmt::Write;

use crate::error::{PhotostatError, Result};
use crate::verify::SuiteReport;

/// Configuration options for formatting suite reports.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Include the aggregate metrics block.
    pub include_metrics: bool,
    /// Include the per-expectation outcome lines.
    pub include_outcomes: bool,
    /// Whether to use colorized output (for the human formatter).
    pub use_colors: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            include_metrics: true,
            include_outcomes: true,
            use_colors: true,
        }
    }
}

impl FormatterConfig {
    /// Creates a minimal configuration showing only the summary.
    pub fn minimal() -> Self {
        Self {
            include_metrics: true,
            include_outcomes: false,
            use_colors: false,
        }
    }

    /// Sets whether to use colorized output.
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }
}

/// Trait for formatting a suite report into an output format.
pub trait ResultFormatter {
    /// Formats a suite report into a string representation.
    fn format(&self, report: &SuiteReport) -> Result<String>;
}

/// Formats suite reports as structured JSON.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter (pretty-printed by default).
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Sets whether to pretty-print.
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

impl ResultFormatter for JsonFormatter {
    fn format(&self, report: &SuiteReport) -> Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(report).map_err(PhotostatError::Json)
        } else {
            serde_json::to_string(report).map_err(PhotostatError::Json)
        }
    }
}

/// Formats suite reports for console output: one line per expectation plus
/// summary counts.
#[derive(Debug, Clone)]
pub struct HumanFormatter {
    config: FormatterConfig,
}

impl HumanFormatter {
    /// Creates a new human formatter with default configuration.
    pub fn new() -> Self {
        Self {
            config: FormatterConfig::default(),
        }
    }

    /// Creates a new human formatter with the specified configuration.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for HumanFormatter {
    fn format(&self, report: &SuiteReport) -> Result<String> {
        let config = &self.config;
        let mut output = String::new();

        writeln!(output).ok();
        let headline = if report.is_success() {
            "Verification PASSED"
        } else {
            "Verification FAILED"
        };
        if config.use_colors {
            let color = if report.is_success() { "32" } else { "31" };
            writeln!(output, "\x1b[{color}m{headline}\x1b[0m: {}", report.suite_name).ok();
        } else {
            writeln!(output, "{headline}: {}", report.suite_name).ok();
        }

        if config.include_outcomes {
            for outcome in &report.outcomes {
                let mark = if outcome.status.is_passed() {
                    "✅"
                } else {
                    "❌"
                };
                writeln!(output, "  {mark} {}", outcome.name).ok();
                if let Some(message) = &outcome.message {
                    writeln!(output, "      {message}").ok();
                }
            }
        }

        if config.include_metrics {
            writeln!(output).ok();
            writeln!(
                output,
                "  {} checks: {} passed, {} failed ({:.1}%)",
                report.metrics.total_checks,
                report.metrics.passed_checks,
                report.metrics.failed_checks,
                report.metrics.success_rate()
            )
            .ok();
        }

        Ok(output)
    }
}
