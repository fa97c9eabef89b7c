//! Readability formulas
//!
//! Each formula maps a subset of [`Statistics`] to a grade-like score. All
//! counts are promoted to `f64` before dividing.

use crate::age::{AgeTable, MAX_BUCKET};
use crate::error::Result;
use crate::statistics::Statistics;
use std::fmt;

/// Supported readability formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Formula {
    /// Automated Readability Index
    #[cfg_attr(feature = "serde", serde(rename = "ARI"))]
    AutomatedReadabilityIndex,
    /// Flesch-Kincaid readability test
    #[cfg_attr(feature = "serde", serde(rename = "FK"))]
    FleschKincaid,
    /// Simple Measure of Gobbledygook
    #[cfg_attr(feature = "serde", serde(rename = "SMOG"))]
    Smog,
    /// Coleman-Liau index
    #[cfg_attr(feature = "serde", serde(rename = "CL"))]
    ColemanLiau,
}

impl Formula {
    /// All formulas, in reporting order
    pub const ALL: [Formula; 4] = [
        Formula::AutomatedReadabilityIndex,
        Formula::FleschKincaid,
        Formula::Smog,
        Formula::ColemanLiau,
    ];

    /// Short selector code
    pub fn code(&self) -> &'static str {
        match self {
            Formula::AutomatedReadabilityIndex => "ARI",
            Formula::FleschKincaid => "FK",
            Formula::Smog => "SMOG",
            Formula::ColemanLiau => "CL",
        }
    }

    /// Full display name
    pub fn name(&self) -> &'static str {
        match self {
            Formula::AutomatedReadabilityIndex => "Automated Readability Index",
            Formula::FleschKincaid => "Flesch–Kincaid readability tests",
            Formula::Smog => "Simple Measure of Gobbledygook",
            Formula::ColemanLiau => "Coleman–Liau index",
        }
    }

    /// Compute the raw score
    ///
    /// Fails with `EmptyInput` when the statistics have no sentences or no
    /// words.
    pub fn score(&self, stats: &Statistics) -> Result<f64> {
        stats.ensure_measurable()?;

        let score = match self {
            Formula::AutomatedReadabilityIndex => automated_readability_index(
                stats.characters,
                stats.words,
                stats.sentences,
            ),
            Formula::FleschKincaid => flesch_kincaid(stats.words, stats.sentences, stats.syllables),
            Formula::Smog => smog(stats.polysyllables, stats.sentences),
            Formula::ColemanLiau => coleman_liau(stats.characters, stats.sentences, stats.words),
        };

        log::debug!("{} score: {}", self.code(), score);
        Ok(score)
    }

    /// Compute the score and resolve its reader age
    pub fn evaluate(&self, stats: &Statistics, ages: &AgeTable) -> Result<ScoreResult> {
        let score = self.score(stats)?;
        let age = ages.lookup(score)?;

        Ok(ScoreResult {
            formula: *self,
            score,
            age,
            open_ended: score > MAX_BUCKET as f64,
        })
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// `4.71 * (characters / words) + 0.5 * (words / sentences) - 21.43`
pub fn automated_readability_index(characters: usize, words: usize, sentences: usize) -> f64 {
    4.71 * (characters as f64 / words as f64) + 0.5 * (words as f64 / sentences as f64) - 21.43
}

/// `0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59`
pub fn flesch_kincaid(words: usize, sentences: usize, syllables: usize) -> f64 {
    0.39 * (words as f64 / sentences as f64) + 11.8 * (syllables as f64 / words as f64) - 15.59
}

/// `1.043 * sqrt(polysyllables * 30 / sentences) + 3.1291`
pub fn smog(polysyllables: usize, sentences: usize) -> f64 {
    1.043 * (polysyllables as f64 * 30.0 / sentences as f64).sqrt() + 3.1291
}

/// `0.0588 * L - 0.296 * S - 15.8`, with `L` characters and `S` sentences per
/// hundred words
pub fn coleman_liau(characters: usize, sentences: usize, words: usize) -> f64 {
    let letters = characters as f64 / words as f64 * 100.0;
    let sentences = sentences as f64 / words as f64 * 100.0;
    0.0588 * letters - 0.296 * sentences - 15.8
}

/// Outcome of one formula
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreResult {
    /// Formula that produced the score
    pub formula: Formula,
    /// Raw score
    pub score: f64,
    /// Reader age resolved from the rounded score
    pub age: u32,
    /// Whether the score exceeds the table, making the age a lower bound
    pub open_ended: bool,
}

impl ScoreResult {
    /// Age as presented to readers: `"13"`, or `"24+"` when open-ended
    pub fn age_label(&self) -> String {
        if self.open_ended {
            format!("{}+", self.age)
        } else {
            self.age.to_string()
        }
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.2} (about {} years old).",
            self.formula.name(),
            self.score,
            self.age_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReadabilityError;

    const TOLERANCE: f64 = 1e-9;

    fn fixed_stats() -> Statistics {
        Statistics::new(100, 5, 450, 150, 10)
    }

    #[test]
    fn test_ari_matches_expression() {
        let score = Formula::AutomatedReadabilityIndex
            .score(&fixed_stats())
            .unwrap();
        let expected = 4.71 * (450.0 / 100.0) + 0.5 * (100.0 / 5.0) - 21.43;
        assert!((score - expected).abs() < TOLERANCE);
        assert!((score - 9.765).abs() < TOLERANCE);
    }

    #[test]
    fn test_fk_matches_expression() {
        let score = Formula::FleschKincaid.score(&fixed_stats()).unwrap();
        let expected = 0.39 * (100.0 / 5.0) + 11.8 * (150.0 / 100.0) - 15.59;
        assert!((score - expected).abs() < TOLERANCE);
        assert!((score - 9.91).abs() < TOLERANCE);
    }

    #[test]
    fn test_smog_matches_expression() {
        let score = Formula::Smog.score(&fixed_stats()).unwrap();
        let expected = 1.043 * (10.0_f64 * 30.0 / 5.0).sqrt() + 3.1291;
        assert!((score - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_cl_matches_expression() {
        let score = Formula::ColemanLiau.score(&fixed_stats()).unwrap();
        let expected = 0.0588 * (450.0 / 100.0 * 100.0) - 0.296 * (5.0 / 100.0 * 100.0) - 15.8;
        assert!((score - expected).abs() < TOLERANCE);
        assert!((score - 9.18).abs() < TOLERANCE);
    }

    #[test]
    fn test_float_division_not_truncated() {
        // 7 / 2 must stay 3.5
        let score = flesch_kincaid(7, 2, 7);
        let expected = 0.39 * 3.5 + 11.8 - 15.59;
        assert!((score - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_zero_sentences_rejected() {
        let stats = Statistics::new(10, 0, 40, 12, 1);
        for formula in Formula::ALL {
            assert_eq!(
                formula.score(&stats),
                Err(ReadabilityError::EmptyInput {
                    sentences: 0,
                    words: 10
                })
            );
        }
    }

    #[test]
    fn test_zero_words_rejected() {
        let stats = Statistics::new(0, 1, 0, 0, 0);
        for formula in Formula::ALL {
            assert!(matches!(
                formula.score(&stats),
                Err(ReadabilityError::EmptyInput { words: 0, .. })
            ));
        }
    }

    #[test]
    fn test_evaluate_resolves_age() {
        let result = Formula::AutomatedReadabilityIndex
            .evaluate(&fixed_stats(), &AgeTable::STANDARD)
            .unwrap();
        // 9.765 rounds to bucket 10
        assert_eq!(result.age, 16);
        assert!(!result.open_ended);
        assert_eq!(result.age_label(), "16");
    }

    #[test]
    fn test_evaluate_open_ended() {
        // 14 < score < 14.5 still rounds into the table
        let stats = Statistics::new(10, 1, 65, 10, 0);
        let score = Formula::AutomatedReadabilityIndex.score(&stats).unwrap();
        assert!(score > 14.0 && score < 14.5);

        let result = Formula::AutomatedReadabilityIndex
            .evaluate(&stats, &AgeTable::STANDARD)
            .unwrap();
        assert!(result.open_ended);
        assert_eq!(result.age, 24);
        assert_eq!(result.age_label(), "24+");
    }

    #[test]
    fn test_evaluate_out_of_range() {
        let stats = Statistics::new(6, 2, 20, 6, 0);
        assert!(matches!(
            Formula::AutomatedReadabilityIndex.evaluate(&stats, &AgeTable::STANDARD),
            Err(ReadabilityError::ScoreOutOfRange { rounded: -4, .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        let stats = fixed_stats();
        for formula in Formula::ALL {
            assert_eq!(formula.score(&stats), formula.score(&stats));
        }
    }

    #[test]
    fn test_display() {
        let result = ScoreResult {
            formula: Formula::Smog,
            score: 7.25,
            age: 13,
            open_ended: false,
        };
        assert_eq!(
            result.to_string(),
            "Simple Measure of Gobbledygook: 7.25 (about 13 years old)."
        );
    }
}
