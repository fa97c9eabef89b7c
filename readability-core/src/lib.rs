//! Readability metrics for plain text
//!
//! This crate derives word, sentence, character, syllable and polysyllable
//! counts from a text and feeds them to four readability formulas: the
//! Automated Readability Index, Flesch-Kincaid, SMOG and Coleman-Liau. Each
//! score is mapped to an estimated reader age through a fixed lookup table.
//!
//! # Pipeline
//!
//! - [`statistics`]: sentence and word tokenization, character counting
//! - [`syllable`]: vowel-run syllable heuristic
//! - [`formula`]: the four scoring formulas
//! - [`age`]: score bucket to reader age lookup
//! - [`analyzer`]: ties the stages together and averages ages
//!
//! # Example
//!
//! ```rust
//! use readability_core::{Analyzer, Selector};
//!
//! let analyzer = Analyzer::new();
//! let text = "The old man walked to the market every morning. He bought fresh bread.";
//! let report = analyzer.analyze(text, "FK".parse::<Selector>().unwrap()).unwrap();
//!
//! assert_eq!(report.statistics.sentences, 2);
//! assert_eq!(report.scores.len(), 1);
//! ```

pub mod age;
pub mod analyzer;
pub mod config;
pub mod error;
pub mod formula;
pub mod selector;
pub mod statistics;
pub mod syllable;

pub use age::AgeTable;
pub use analyzer::{analyze, Analyzer, Report};
pub use config::{Config, ConfigBuilder};
pub use error::{ReadabilityError, Result};
pub use formula::{Formula, ScoreResult};
pub use selector::Selector;
pub use statistics::Statistics;
pub use syllable::estimate_syllables;
