//! Configuration module

use crate::commands::analyze::OutputFormat;
use crate::error::CliError;
use anyhow::{Context, Result};
use clap::ValueEnum;
use readability_core::age::STANDARD_AGES;
use readability_core::{Config, Selector};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Age table configuration
    #[serde(default)]
    pub ages: AgesConfig,
}

/// Analysis-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct AnalysisConfig {
    /// Score selector used when `--score` is absent (prompt when unset)
    #[serde(default)]
    pub default_score: Option<String>,

    /// Analyze raw file content instead of joining lines
    #[serde(default)]
    pub keep_newlines: bool,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "text_format")]
    pub default_format: String,

    /// Echo the analyzed text before the statistics
    #[serde(default)]
    pub show_text: bool,
}

fn text_format() -> String {
    "text".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: text_format(),
            show_text: false,
        }
    }
}

/// Reader ages for score buckets 1 through 14
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct AgesConfig {
    #[serde(default = "standard_table")]
    pub table: Vec<u32>,
}

fn standard_table() -> Vec<u32> {
    STANDARD_AGES.to_vec()
}

impl Default for AgesConfig {
    fn default() -> Self {
        Self {
            table: standard_table(),
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Check every value that is interpreted later
    pub fn validate(&self) -> Result<()> {
        self.default_selector()?;
        self.default_format()?;
        self.analyzer_config()?;
        Ok(())
    }

    /// Parsed default selector, if one is configured
    pub fn default_selector(&self) -> Result<Option<Selector>> {
        self.analysis
            .default_score
            .as_deref()
            .map(|code| {
                code.parse::<Selector>()
                    .map_err(|e| anyhow::Error::from(CliError::ConfigError(e.to_string())))
            })
            .transpose()
    }

    /// Parsed default output format
    pub fn default_format(&self) -> Result<OutputFormat> {
        OutputFormat::from_str(&self.output.default_format, true).map_err(|_| {
            anyhow::Error::from(CliError::ConfigError(format!(
                "unknown output format '{}'",
                self.output.default_format
            )))
        })
    }

    /// Analyzer configuration carrying the age table
    pub fn analyzer_config(&self) -> Result<Config> {
        Config::builder()
            .ages(self.ages.table.clone())
            .build()
            .map_err(|e| anyhow::Error::from(CliError::ConfigError(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readability_core::AgeTable;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::parse("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.default_selector().unwrap(), None);
        assert!(matches!(config.default_format().unwrap(), OutputFormat::Text));
        assert_eq!(
            config.analyzer_config().unwrap().age_table(),
            &AgeTable::STANDARD
        );
    }

    #[test]
    fn test_full_config() {
        let config = CliConfig::parse(
            r#"
[analysis]
default_score = "SMOG"
keep_newlines = true

[output]
default_format = "json"
show_text = true

[ages]
table = [5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18]
"#,
        )
        .unwrap();

        assert!(config.analysis.keep_newlines);
        assert!(config.output.show_text);
        assert_eq!(
            config.default_selector().unwrap().map(|s| s.code()),
            Some("SMOG")
        );
        assert!(matches!(config.default_format().unwrap(), OutputFormat::Json));
        assert_eq!(
            config.analyzer_config().unwrap().age_table().age_for_bucket(14),
            Some(18)
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = CliConfig::parse("[analysis]\ndefault_score = \"median\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = CliConfig::parse("[output]\ndefault_format = \"pdf\"\n").unwrap();
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("unknown output format 'pdf'"));

        let config = CliConfig::parse("[ages]\ntable = [6, 7]\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let error = CliConfig::parse("[analysis\n").unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("readability.toml");
        std::fs::write(&path, "[analysis]\ndefault_score = \"all\"\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.default_selector().unwrap(), Some(Selector::All));

        let missing = CliConfig::load(&temp_dir.path().join("missing.toml"));
        assert!(missing.unwrap_err().to_string().contains("Failed to read config"));
    }
}
