//! Validate command implementation

use crate::config::CatalogConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the catalog file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub catalog: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating catalog: {}", self.catalog.display());

        match CatalogConfig::from_file(&self.catalog) {
            Ok(catalog) => {
                println!("✓ Catalog is valid!");
                println!("  Name: {}", catalog.metadata.name);
                println!("  Messages: {}", catalog.messages.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Catalog is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            catalog: PathBuf::from("errors.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("errors.toml"));
    }

    #[test]
    fn test_validate_valid_catalog() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "[metadata]\nname = \"stack\"\n\n[messages]\nfull = \"full of stack\"\noutOfBounds = \"out of bounds\"\n"
        )
        .unwrap();

        let args = ValidateArgs {
            catalog: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_catalog() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[messages]\nbroken = \"a:--> b\"\n").unwrap();

        let args = ValidateArgs {
            catalog: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_err());
    }
}
