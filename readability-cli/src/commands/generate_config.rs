//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use readability_core::age::STANDARD_AGES;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Default score to store in the file (prompting stays enabled when omitted)
    #[arg(short, long, value_name = "SELECTOR")]
    pub score: Option<String>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if let Some(code) = &self.score {
            code.parse::<readability_core::Selector>()?;
        }

        println!("Generating readability configuration...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to change the defaults");
        println!("2. Validate your configuration:");
        println!("   readability validate --config {}", self.output.display());
        println!("3. Use it for analysis:");
        println!(
            "   readability analyze -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate configuration content
    fn generate_template(&self) -> String {
        let score_line = match &self.score {
            Some(code) => format!("default_score = \"{}\"", code.trim()),
            None => "# default_score = \"all\"".to_string(),
        };
        let ages = STANDARD_AGES
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"# Readability configuration

[analysis]
# Score used when --score is not given: ARI, FK, SMOG, CL or all.
# Leave unset to be asked on standard input.
{score_line}

# Analyze files as-is. When false, lines are joined without separators
# before analysis.
keep_newlines = false

[output]
# One of: text, json, markdown
default_format = "text"

# Echo the analyzed text before its statistics
show_text = false

[ages]
# Reader age for rounded scores 1 through 14
table = [{ages}]
"#
        )
    }
}
