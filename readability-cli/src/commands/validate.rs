//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let result = CliConfig::load(&self.config).and_then(|config| {
            config.validate()?;
            Ok(config)
        });

        match result {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!(
                    "  Default score: {}",
                    config
                        .analysis
                        .default_score
                        .as_deref()
                        .unwrap_or("(prompt)")
                );
                println!("  Default format: {}", config.output.default_format);
                println!("  Keep newlines: {}", config.analysis.keep_newlines);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}
