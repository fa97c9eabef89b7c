//! End-to-end readability analysis

use crate::age::AgeTable;
use crate::config::Config;
use crate::error::Result;
use crate::formula::ScoreResult;
use crate::selector::Selector;
use crate::statistics::Statistics;

/// Result of analysing one text
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    /// Counts computed from the text
    pub statistics: Statistics,
    /// One result per selected formula, in reporting order
    pub scores: Vec<ScoreResult>,
    /// Mean of the resolved ages, present when all formulas were selected
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub average_age: Option<f64>,
}

/// Arithmetic mean of the resolved ages
///
/// Open-ended results contribute their table age unchanged, so an average over
/// `24+` and `24` cannot be told apart.
pub fn average_age(scores: &[ScoreResult]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let sum: f64 = scores.iter().map(|result| f64::from(result.age)).sum();
    Some(sum / scores.len() as f64)
}

/// Score precomputed statistics
///
/// Any formula failure aborts the whole evaluation.
pub fn evaluate(stats: &Statistics, selector: Selector, ages: &AgeTable) -> Result<Report> {
    let scores = selector
        .formulas()
        .iter()
        .map(|formula| formula.evaluate(stats, ages))
        .collect::<Result<Vec<_>>>()?;

    let average_age = match selector {
        Selector::All => average_age(&scores),
        Selector::Single(_) => None,
    };

    Ok(Report {
        statistics: *stats,
        scores,
        average_age,
    })
}

/// Compute statistics for `text` and score them
pub fn analyze(text: &str, selector: Selector, ages: &AgeTable) -> Result<Report> {
    let stats = Statistics::from_text(text);
    evaluate(&stats, selector, ages)
}

/// Reusable analyzer bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: Config,
}

impl Analyzer {
    /// Create an analyzer with the standard age table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyze a text with the selected formulas
    pub fn analyze(&self, text: &str, selector: Selector) -> Result<Report> {
        log::debug!("Analyzing {} bytes with selector {}", text.len(), selector);
        analyze(text, selector, &self.config.age_table)
    }

    /// Score precomputed statistics with the selected formulas
    pub fn evaluate(&self, stats: &Statistics, selector: Selector) -> Result<Report> {
        evaluate(stats, selector, &self.config.age_table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReadabilityError;
    use crate::formula::Formula;

    fn fixed_stats() -> Statistics {
        Statistics::new(100, 5, 450, 150, 10)
    }

    #[test]
    fn test_single_selector_has_no_average() {
        let report = Analyzer::new()
            .evaluate(&fixed_stats(), Selector::Single(Formula::FleschKincaid))
            .unwrap();

        assert_eq!(report.scores.len(), 1);
        assert_eq!(report.scores[0].formula, Formula::FleschKincaid);
        assert_eq!(report.average_age, None);
    }

    #[test]
    fn test_all_selector_averages_ages() {
        let report = Analyzer::new()
            .evaluate(&fixed_stats(), Selector::All)
            .unwrap();

        let formulas: Vec<_> = report.scores.iter().map(|r| r.formula).collect();
        assert_eq!(formulas, Formula::ALL.to_vec());

        // ARI 9.765 -> 16, FK 9.91 -> 16, SMOG 11.21 -> 17, CL 9.18 -> 15
        let ages: Vec<_> = report.scores.iter().map(|r| r.age).collect();
        assert_eq!(ages, vec![16, 16, 17, 15]);
        assert_eq!(report.average_age, Some(16.0));
    }

    #[test]
    fn test_average_uses_table_age_for_open_ended() {
        let scores = [
            ScoreResult {
                formula: Formula::AutomatedReadabilityIndex,
                score: 14.2,
                age: 24,
                open_ended: true,
            },
            ScoreResult {
                formula: Formula::Smog,
                score: 12.9,
                age: 24,
                open_ended: false,
            },
        ];
        assert_eq!(average_age(&scores), Some(24.0));
        assert_eq!(average_age(&[]), None);
    }

    #[test]
    fn test_any_failure_aborts_all() {
        // ARI for this text is negative while SMOG stays in range
        let result = Analyzer::new().analyze("The cat sat. It ran fast.", Selector::All);
        assert!(matches!(
            result,
            Err(ReadabilityError::ScoreOutOfRange { .. })
        ));
    }

    #[test]
    fn test_empty_text() {
        let result = analyze("", Selector::All, &AgeTable::STANDARD);
        assert_eq!(
            result,
            Err(ReadabilityError::EmptyInput {
                sentences: 0,
                words: 0
            })
        );
    }

    #[test]
    fn test_custom_age_table_is_used() {
        let ages = [5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18];
        let config = Config::builder().ages(ages).build().unwrap();
        let analyzer = Analyzer::with_config(config);

        let report = analyzer
            .evaluate(&fixed_stats(), Selector::Single(Formula::AutomatedReadabilityIndex))
            .unwrap();
        assert_eq!(report.scores[0].age, 14);
        assert_eq!(analyzer.config().age_table().ages(), &ages);
    }
}
