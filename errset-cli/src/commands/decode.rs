//! Decode command implementation

use crate::config::OutputConfig;
use crate::error::CliError;
use crate::input::read_message;
use crate::output::{write_report, OutputFormat, Report};
use anyhow::Result;
use clap::Args;
use errset_core::RaisedError;
use std::io::Write;

/// Arguments for the decode command
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Raised message (reads stdin when omitted or `-`)
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,
}

impl DecodeArgs {
    /// Execute the decode command
    pub fn execute(&self) -> Result<()> {
        let raw = read_message(self.message.as_deref(), std::io::stdin().lock())?;
        self.run(&raw, std::io::stdout().lock())
    }

    /// Decode `raw` and write the report to `out`
    pub fn run<W: Write>(&self, raw: &str, out: W) -> Result<()> {
        log::info!("Decoding raised message");
        let decoded = RaisedError::from_encoded(raw)
            .decode()
            .map_err(|e| CliError::DecodeError(e.to_string()))?;
        if decoded.payload.is_none() {
            log::warn!("No payload delimiter found in message");
        }

        let (message, payload) = decoded.into_parts();
        let config = OutputConfig::default().with_compact(self.compact);
        write_report(out, self.format, config, &Report::decoded(message, payload))
    }
}
