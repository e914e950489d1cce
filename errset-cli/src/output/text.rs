//! Plain text output formatter

use super::{OutputFormatter, Report};
use anyhow::Result;
use std::io::Write;

/// Text formatter - one `field: value` line per field
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        if let Some(key) = &report.key {
            writeln!(self.writer, "key: {key}")?;
        }
        if let Some(matched) = report.matched {
            writeln!(self.writer, "matched: {matched}")?;
        }
        writeln!(self.writer, "message: {}", report.message)?;
        match &report.payload {
            Some(payload) => writeln!(self.writer, "payload: {payload}")?,
            None => writeln!(self.writer, "payload: (none)")?,
        }
        self.writer.flush()?;
        Ok(())
    }
}
