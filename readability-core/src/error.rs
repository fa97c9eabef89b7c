//! Error types for readability analysis

use thiserror::Error;

/// Errors raised while computing readability scores
///
/// All core operations are pure computations, so every variant describes a
/// property of the input rather than an environmental failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReadabilityError {
    /// The text has no sentences or no words, so ratios cannot be formed
    #[error("empty input: text contains {sentences} sentence(s) and {words} word(s)")]
    EmptyInput {
        /// Number of sentences found
        sentences: usize,
        /// Number of words found
        words: usize,
    },

    /// A score rounds to a bucket outside the age table
    #[error("score {score} rounds to {rounded}, outside the age table range 1..=14")]
    ScoreOutOfRange {
        /// Raw score before rounding
        score: f64,
        /// Rounded bucket that failed the lookup
        rounded: i64,
    },

    /// The score selector names no known formula
    #[error("unknown score selector '{0}' (expected one of ARI, FK, SMOG, CL, all)")]
    UnknownSelector(String),

    /// Invalid analyzer configuration
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for readability operations
pub type Result<T> = std::result::Result<T, ReadabilityError>;
