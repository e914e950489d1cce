//! errset command-line entry point

use clap::Parser;
use errset_cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}
