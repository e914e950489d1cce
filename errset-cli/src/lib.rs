//! errset CLI library
//!
//! This library provides the command-line interface for inspecting raised
//! `errset` failure messages outside the process that produced them.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};

use clap::Parser;
use commands::Commands;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "errset", version, about = "Decode and classify raised errset failures")]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Initialize logging and run the selected command
    pub fn run(&self) -> CliResult<()> {
        self.init_logging();
        log::debug!("Arguments: {:?}", self);
        self.command.execute()
    }

    /// Log filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if !self.quiet {
            env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(self.log_level()),
            )
            .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_match_command() {
        let cli = Cli::try_parse_from([
            "errset",
            "-vv",
            "match",
            "--catalog",
            "errors.toml",
            "-k",
            "notFound",
            "not found:--> null",
        ])
        .unwrap();

        assert_eq!(cli.log_level(), "debug");
        match cli.command {
            Commands::Match(args) => {
                assert_eq!(args.key.as_deref(), Some("notFound"));
                assert_eq!(args.message.as_deref(), Some("not found:--> null"));
            }
            other => panic!("expected match command, got {other:?}"),
        }
    }

    #[test]
    fn test_match_requires_catalog() {
        assert!(Cli::try_parse_from(["errset", "match", "message"]).is_err());
    }

    #[test]
    fn test_default_log_level() {
        let cli = Cli::try_parse_from(["errset", "decode", "-q"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.log_level(), "warn");
    }
}
