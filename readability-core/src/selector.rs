//! Score selection

use crate::error::ReadabilityError;
use crate::formula::Formula;
use std::fmt;
use std::str::FromStr;

/// Which formulas to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// A single formula
    Single(Formula),
    /// All four formulas plus the average age
    All,
}

impl Selector {
    /// Accepted selector strings
    pub const CODES: [&'static str; 5] = ["ARI", "FK", "SMOG", "CL", "all"];

    /// Formulas to run, in reporting order
    pub fn formulas(&self) -> &'static [Formula] {
        match self {
            Selector::Single(Formula::AutomatedReadabilityIndex) => {
                &[Formula::AutomatedReadabilityIndex]
            }
            Selector::Single(Formula::FleschKincaid) => &[Formula::FleschKincaid],
            Selector::Single(Formula::Smog) => &[Formula::Smog],
            Selector::Single(Formula::ColemanLiau) => &[Formula::ColemanLiau],
            Selector::All => &Formula::ALL,
        }
    }

    /// Selector string
    pub fn code(&self) -> &'static str {
        match self {
            Selector::Single(formula) => formula.code(),
            Selector::All => "all",
        }
    }
}

impl FromStr for Selector {
    type Err = ReadabilityError;

    /// Parse a selector; matching is case-sensitive and ignores surrounding
    /// whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ARI" => Ok(Selector::Single(Formula::AutomatedReadabilityIndex)),
            "FK" => Ok(Selector::Single(Formula::FleschKincaid)),
            "SMOG" => Ok(Selector::Single(Formula::Smog)),
            "CL" => Ok(Selector::Single(Formula::ColemanLiau)),
            "all" => Ok(Selector::All),
            other => Err(ReadabilityError::UnknownSelector(other.to_string())),
        }
    }
}

impl From<Formula> for Selector {
    fn from(formula: Formula) -> Self {
        Selector::Single(formula)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
