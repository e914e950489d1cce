//! Match command implementation

use crate::config::CatalogConfig;
use crate::error::CliError;
use crate::input::read_message;
use crate::output::{write_report, OutputFormat, Report};
use anyhow::Result;
use clap::Args;
use errset_core::codec;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the match command
#[derive(Debug, Args)]
pub struct MatchArgs {
    /// Raised message (reads stdin when omitted or `-`)
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Catalog file declaring the known messages
    #[arg(short, long, value_name = "FILE", required = true)]
    pub catalog: PathBuf,

    /// Only check whether the message belongs to this key
    #[arg(short, long, value_name = "KEY")]
    pub key: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,
}

impl MatchArgs {
    /// Execute the match command
    pub fn execute(&self) -> Result<()> {
        let catalog = CatalogConfig::from_file(&self.catalog)?;
        let raw = read_message(self.message.as_deref(), std::io::stdin().lock())?;
        self.run(&catalog, &raw, std::io::stdout().lock())
    }

    /// Match `raw` against `catalog` and write the report to `out`
    pub fn run<W: Write>(&self, catalog: &CatalogConfig, raw: &str, out: W) -> Result<()> {
        let decoded =
            codec::decode_message(raw).map_err(|e| CliError::DecodeError(e.to_string()))?;

        let report = match &self.key {
            Some(key) => {
                let expected = catalog
                    .message(key)
                    .ok_or_else(|| CliError::UnknownKey(key.clone()))?;
                let matched = decoded.matches_message(expected);
                log::info!(
                    "Message {} key '{key}'",
                    if matched { "matches" } else { "does not match" }
                );
                Report {
                    message: decoded.message,
                    payload: if matched { decoded.payload } else { None },
                    key: Some(key.clone()),
                    matched: Some(matched),
                }
            }
            None => {
                let key = catalog.classify(&decoded).map(str::to_string);
                match &key {
                    Some(found) => log::info!("Message classified as '{found}'"),
                    None => log::warn!(
                        "Message does not belong to catalog '{}'",
                        catalog.metadata.name
                    ),
                }
                Report {
                    matched: Some(key.is_some()),
                    key,
                    message: decoded.message,
                    payload: decoded.payload,
                }
            }
        };

        let config = catalog.output.with_compact(self.compact);
        write_report(out, self.format, config, &report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CatalogConfig {
        CatalogConfig::from_toml(
            r#"
[messages]
dividedByZero = "do not divide by Zero."
dividedByNegative = "well, you did divide as Negative value."
"#,
        )
        .unwrap()
    }

    fn args(key: Option<&str>) -> MatchArgs {
        MatchArgs {
            message: None,
            catalog: PathBuf::from("unused.toml"),
            key: key.map(str::to_string),
            format: OutputFormat::Json,
            compact: false,
        }
    }

    fn run(key: Option<&str>, raw: &str) -> Result<serde_json::Value> {
        let mut out = Vec::new();
        args(key).run(&catalog(), raw, &mut out)?;
        Ok(serde_json::from_slice(&out)?)
    }

    #[test]
    fn test_classify_without_key() {
        let report = run(None, "well, you did divide as Negative value.:--> -2").unwrap();
        assert_eq!(report["key"], "dividedByNegative");
        assert_eq!(report["matched"], true);
        assert_eq!(report["payload"], -2);
    }

    #[test]
    fn test_match_requested_key() {
        let report = run(Some("dividedByZero"), "do not divide by Zero.:--> 0").unwrap();
        assert_eq!(report["matched"], true);
        assert_eq!(report["payload"], 0);
    }

    #[test]
    fn test_mismatch_hides_payload() {
        let report = run(Some("dividedByNegative"), "do not divide by Zero.:--> 0").unwrap();
        assert_eq!(report["matched"], false);
        assert!(report["payload"].is_null());
    }

    #[test]
    fn test_unknown_key() {
        let err = run(Some("dividedByOne"), "do not divide by Zero.:--> 0").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_catalog_requests_compact_json() {
        let catalog = CatalogConfig::from_toml(
            "[messages]\nnotFound = \"not found\"\n\n[output]\npretty_json = false\n",
        )
        .unwrap();
        let mut out = Vec::new();
        args(None).run(&catalog, "not found:--> 1", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"message\":\"not found\",\"payload\":1,\"key\":\"notFound\",\"matched\":true}\n"
        );
    }

    #[test]
    fn test_message_outside_catalog() {
        let report = run(None, "something else").unwrap();
        assert_eq!(report["matched"], false);
        assert!(report.get("key").is_none());
    }
}
