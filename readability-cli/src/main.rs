//! Command-line entry point for readability scoring

use anyhow::Result;
use clap::Parser;
use readability_cli::commands::Commands;

/// Readability scores and reader age estimates for plain text
#[derive(Debug, Parser)]
#[command(name = "readability", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
