//! Output formatters for index reports.

pub mod json;
pub mod plain;

use crate::index::IndexReport;
use serde::{Deserialize, Serialize};

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text output.
    #[default]
    Plain,
    /// JSON output.
    Json,
}

/// Format a report to a string.
pub fn format_report(report: &IndexReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => plain::format(report),
        OutputFormat::Json => json::format(report),
    }
}
