//! Catalog configuration files
//!
//! A catalog file declares the messages an application registers with
//! `error_set!`, so raised messages can be classified outside the process:
//!
//! ```toml
//! [metadata]
//! name = "arithmetic"
//!
//! [messages]
//! dividedByZero = "do not divide by Zero."
//! ```

use crate::error::CliError;
use anyhow::{Context, Result};
use errset_core::codec::{self, Decoded};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Catalog file structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CatalogConfig {
    /// Descriptive metadata
    #[serde(default)]
    pub metadata: CatalogMetadata,

    /// Symbolic key to message
    #[serde(default)]
    pub messages: BTreeMap<String, String>,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Catalog metadata
#[derive(Debug, Deserialize, Serialize)]
pub struct CatalogMetadata {
    /// Catalog name
    pub name: String,
}

impl Default for CatalogMetadata {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

impl OutputConfig {
    /// Apply the `--compact` command-line flag
    pub fn with_compact(mut self, compact: bool) -> Self {
        if compact {
            self.pretty_json = false;
        }
        self
    }
}

impl CatalogConfig {
    /// Load and validate a catalog file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::CatalogNotFound(path.display().to_string()).into());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let catalog = Self::from_toml(&content)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?;
        log::debug!(
            "Loaded catalog '{}' with {} messages",
            catalog.metadata.name,
            catalog.messages.len()
        );
        Ok(catalog)
    }

    /// Parse and validate catalog TOML
    pub fn from_toml(content: &str) -> Result<Self> {
        let catalog: Self = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the catalog against the textual protocol's constraints
    pub fn validate(&self) -> std::result::Result<(), CliError> {
        if self.messages.is_empty() {
            return Err(CliError::InvalidCatalog("no messages declared".to_string()));
        }

        let mut seen: HashMap<&str, &str> = HashMap::new();
        for (key, message) in &self.messages {
            if key.trim().is_empty() {
                return Err(CliError::InvalidCatalog("empty key".to_string()));
            }
            if message.is_empty() {
                return Err(CliError::InvalidCatalog(format!(
                    "message for '{key}' is empty"
                )));
            }
            if codec::contains_delimiter(message) {
                return Err(CliError::InvalidCatalog(format!(
                    "message for '{key}' contains the payload delimiter '{}'",
                    codec::DELIMITER
                )));
            }
            if let Some(other) = seen.insert(message.as_str(), key.as_str()) {
                return Err(CliError::InvalidCatalog(format!(
                    "'{other}' and '{key}' share the same message"
                )));
            }
        }
        Ok(())
    }

    /// Message registered for `key`
    pub fn message(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Key whose message equals the decoded message
    pub fn classify(&self, decoded: &Decoded) -> Option<&str> {
        self.messages
            .iter()
            .find(|(_, message)| decoded.matches_message(message))
            .map(|(key, _)| key.as_str())
    }
}
