//! Output formatting module

use crate::config::OutputConfig;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

/// Report for a decoded raised message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Message part
    pub message: String,
    /// Decoded payload, if a delimiter was present
    pub payload: Option<Value>,
    /// Catalog key the message belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Whether the message matched the requested key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<bool>,
}

impl Report {
    /// Report without catalog information
    pub fn decoded(message: String, payload: Option<Value>) -> Self {
        Self {
            message,
            payload,
            key: None,
            matched: None,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Write one report
    fn write_report(&mut self, report: &Report) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// JSON object
    Json,
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Write `report` to `writer` in the requested format
pub fn write_report<W: std::io::Write>(
    writer: W,
    format: OutputFormat,
    config: OutputConfig,
    report: &Report,
) -> Result<()> {
    match format {
        OutputFormat::Text => TextFormatter::new(writer).write_report(report),
        OutputFormat::Json if config.pretty_json => {
            JsonFormatter::new(writer).write_report(report)
        }
        OutputFormat::Json => JsonFormatter::new(writer).compact().write_report(report),
    }
}
