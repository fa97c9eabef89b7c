//! Analyzer configuration

use crate::age::AgeTable;
use crate::error::Result;

/// Analyzer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub(crate) age_table: AgeTable,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Age table used to resolve scores
    pub fn age_table(&self) -> &AgeTable {
        &self.age_table
    }
}

/// Fluent builder for [`Config`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    ages: Option<Vec<u32>>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the standard age table with custom ages for buckets 1..=14
    pub fn ages(mut self, ages: impl Into<Vec<u32>>) -> Self {
        self.ages = Some(ages.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<Config> {
        let age_table = match self.ages {
            Some(ages) => AgeTable::from_ages(&ages)?,
            None => AgeTable::STANDARD,
        };

        Ok(Config { age_table })
    }
}
