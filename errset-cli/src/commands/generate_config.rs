//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Catalog name written to the metadata section
    #[arg(short, long, value_name = "NAME", default_value = "errors")]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating catalog template...");
        println!("  Catalog name: {}", self.name);
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Catalog template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Mirror the messages declared with error_set! in your code");
        println!("2. Validate the catalog:");
        println!("   errset validate --catalog {}", self.output.display());
        println!("3. Classify a raised message:");
        println!(
            "   errset match --catalog {} \"<message>\"",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template catalog content
    fn generate_template(&self) -> String {
        format!(
            r#"# Error catalog for {}

[metadata]
name = "{}"

# Symbolic key = message
#
# Messages are compared verbatim against the part of a raised message
# before the payload delimiter, so they must not contain ":--> " and
# must be unique within the catalog.
[messages]
notFound = "not found"
somethingWrong = "something wrong..."
wrongHeader = "please fix your header."

# JSON layout used by `errset match -f json` (`--compact` overrides it)
[output]
pretty_json = true
"#,
            self.name, self.name
        )
    }
}
