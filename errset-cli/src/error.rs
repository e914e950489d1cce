//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Catalog file not found or inaccessible
    CatalogNotFound(String),
    /// Catalog failed validation
    InvalidCatalog(String),
    /// Key is not declared in the catalog
    UnknownKey(String),
    /// Raised message could not be decoded
    DecodeError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::CatalogNotFound(path) => write!(f, "Catalog not found: {path}"),
            CliError::InvalidCatalog(msg) => write!(f, "Invalid catalog: {msg}"),
            CliError::UnknownKey(key) => write!(f, "Unknown catalog key: {key}"),
            CliError::DecodeError(msg) => write!(f, "Decode error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
