//! JSON output formatter

use super::{OutputFormatter, Report};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs the report as a JSON object
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new pretty-printing JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
        }
    }

    /// Emit compact single-line JSON instead
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, report)?;
        } else {
            serde_json::to_writer(&mut self.writer, report)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
