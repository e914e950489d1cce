//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod decode;
pub mod generate_config;
pub mod matching;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode a raised failure message into message and payload
    Decode(decode::DecodeArgs),

    /// Classify a raised failure message against a catalog
    Match(matching::MatchArgs),

    /// Validate a catalog file
    Validate(validate::ValidateArgs),

    /// Generate a catalog template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Decode(args) => args.execute(),
            Commands::Match(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}
