//! CLI command implementations

use crate::error::CliResult;
use clap::{Subcommand, ValueEnum};
use readability_core::{Formula, Selector};
use std::fmt::Write as _;

pub mod analyze;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute readability scores for text files
    Analyze(analyze::AnalyzeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file with default values
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available score selectors
    Scores,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Render the listing
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Scores => {
                let _ = writeln!(out, "Available scores:");
                for formula in Formula::ALL {
                    let _ = writeln!(out, "  {:<5} {}", formula.code(), formula.name());
                }
                let _ = writeln!(
                    out,
                    "  {:<5} All of the above and the average age",
                    Selector::All.code()
                );
            }
            ListCommands::Formats => {
                let _ = writeln!(out, "Available output formats:");
                for format in analyze::OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        let _ = writeln!(
                            out,
                            "  {:<9} {}",
                            value.get_name(),
                            value.get_help().map(|h| h.to_string()).unwrap_or_default()
                        );
                    }
                }
            }
        }
        out
    }
}
