//! Raised message input

use anyhow::{Context, Result};
use std::io::Read;

/// Resolve the raised message from an argument, or from `reader` when the
/// argument is absent or `-`
pub fn read_message<R: Read>(arg: Option<&str>, mut reader: R) -> Result<String> {
    match arg {
        Some(message) if message != "-" => Ok(message.to_string()),
        _ => {
            let mut buffer = String::new();
            reader
                .read_to_string(&mut buffer)
                .context("Failed to read message from stdin")?;
            let trimmed = buffer.trim_end_matches(['\r', '\n']);
            log::debug!("Read {} bytes from stdin", trimmed.len());
            Ok(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_wins() {
        let message = read_message(Some("not found:--> null"), "ignored".as_bytes()).unwrap();
        assert_eq!(message, "not found:--> null");
    }

    #[test]
    fn test_reads_reader_and_strips_newline() {
        let message = read_message(None, "boom:--> 1\n".as_bytes()).unwrap();
        assert_eq!(message, "boom:--> 1");

        let message = read_message(Some("-"), "dash\r\n".as_bytes()).unwrap();
        assert_eq!(message, "dash");
    }
}
