//! Text statistics feeding the readability formulas
//!
//! Tokenization is a single pass with no grammar awareness: a sentence ends
//! at `.`, `!` or `?` directly followed by one whitespace character, and words
//! are separated by single whitespace characters. Abbreviations, decimals and
//! quoted punctuation are not special-cased.
//!
//! Both splitters share the same token rules:
//! - a string with no delimiter is one token, even when empty;
//! - trailing empty tokens are dropped;
//! - leading and interior empty tokens are kept (and counted as words).

use crate::error::{ReadabilityError, Result};
use crate::syllable::{estimate_syllables, POLYSYLLABLE_THRESHOLD};
use regex::Regex;
use std::sync::OnceLock;

static SENTENCE_DELIMITER: OnceLock<Regex> = OnceLock::new();

fn sentence_delimiter() -> &'static Regex {
    SENTENCE_DELIMITER.get_or_init(|| {
        Regex::new(r"[!?.][ \t\n\x0B\x0C\r]").expect("sentence delimiter pattern is valid")
    })
}

/// Check for the whitespace characters recognised by the tokenizer
#[inline]
pub fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn drop_trailing_empty(mut tokens: Vec<&str>) -> Vec<&str> {
    while tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// Split text into sentences
///
/// The terminator and the single whitespace character after it are consumed.
/// Empty text has no sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let delimiter = sentence_delimiter();
    if !delimiter.is_match(text) {
        return vec![text];
    }

    drop_trailing_empty(delimiter.split(text).collect())
}

/// Split a sentence into word tokens on single whitespace characters
pub fn split_words(sentence: &str) -> Vec<&str> {
    if !sentence.contains(is_separator) {
        return vec![sentence];
    }

    drop_trailing_empty(sentence.split(is_separator).collect())
}

/// Count every non-whitespace character, punctuation included
pub fn count_characters(text: &str) -> usize {
    text.chars().filter(|&ch| !is_separator(ch)).count()
}

/// Aggregated counts computed once per text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    /// Word tokens across all sentences
    pub words: usize,
    /// Sentences produced by the splitter
    pub sentences: usize,
    /// Non-whitespace characters in the whole text
    pub characters: usize,
    /// Estimated syllables summed over all words
    pub syllables: usize,
    /// Words with more than two estimated syllables
    pub polysyllables: usize,
}

impl Statistics {
    /// Create statistics from precomputed counts
    pub fn new(
        words: usize,
        sentences: usize,
        characters: usize,
        syllables: usize,
        polysyllables: usize,
    ) -> Self {
        Self {
            words,
            sentences,
            characters,
            syllables,
            polysyllables,
        }
    }

    /// Compute statistics for a text
    pub fn from_text(text: &str) -> Self {
        let sentences = split_sentences(text);

        let mut words = 0;
        let mut syllables = 0;
        let mut polysyllables = 0;

        for sentence in &sentences {
            for word in split_words(sentence) {
                let count = estimate_syllables(word);
                words += 1;
                syllables += count;
                if count > POLYSYLLABLE_THRESHOLD {
                    polysyllables += 1;
                }
            }
        }

        let stats = Self {
            words,
            sentences: sentences.len(),
            characters: count_characters(text),
            syllables,
            polysyllables,
        };
        log::trace!("Computed statistics for {} bytes: {:?}", text.len(), stats);
        stats
    }

    /// Ensure the counts used as divisors are non-zero
    pub fn ensure_measurable(&self) -> Result<()> {
        if self.sentences == 0 || self.words == 0 {
            return Err(ReadabilityError::EmptyInput {
                sentences: self.sentences,
                words: self.words,
            });
        }
        Ok(())
    }

    /// Average words per sentence
    pub fn words_per_sentence(&self) -> f64 {
        self.words as f64 / self.sentences as f64
    }

    /// Average characters per word
    pub fn characters_per_word(&self) -> f64 {
        self.characters as f64 / self.words as f64
    }

    /// Average syllables per word
    pub fn syllables_per_word(&self) -> f64 {
        self.syllables as f64 / self.words as f64
    }

    /// Average sentences per word
    pub fn sentences_per_word(&self) -> f64 {
        self.sentences as f64 / self.words as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_simple_sentences() {
        let text = "The cat sat. It ran fast.";
        let stats = Statistics::from_text(text);

        assert_eq!(stats.sentences, 2);
        assert_eq!(stats.words, 6);
        assert_eq!(stats.characters, 20);
        assert_eq!(stats.syllables, 6);
        assert_eq!(stats.polysyllables, 0);
    }

    #[test]
    fn test_split_sentences_consumes_delimiter() {
        assert_eq!(
            split_sentences("Hi! How are you? Fine."),
            vec!["Hi", "How are you", "Fine."]
        );
    }

    #[test]
    fn test_split_sentences_requires_whitespace_after_terminator() {
        assert_eq!(split_sentences("3.14 is pi"), vec!["3.14 is pi"]);
        assert_eq!(split_sentences("end.Next start"), vec!["end.Next start"]);
    }

    #[test]
    fn test_split_sentences_any_whitespace_kind() {
        assert_eq!(split_sentences("One.\nTwo.\tThree"), vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_split_sentences_drops_trailing_empty() {
        assert_eq!(split_sentences("Hello. "), vec!["Hello"]);
        assert!(split_sentences(". ").is_empty());
    }

    #[test]
    fn test_split_sentences_keeps_interior_empty() {
        assert_eq!(split_sentences("Hi. . Bye"), vec!["Hi", "", "Bye"]);
    }

    #[test]
    fn test_split_sentences_empty_text() {
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn test_split_words_consecutive_whitespace() {
        assert_eq!(split_words("a  b"), vec!["a", "", "b"]);
        assert_eq!(split_words(" a"), vec!["", "a"]);
        assert_eq!(split_words("a b  "), vec!["a", "b"]);
    }

    #[test]
    fn test_split_words_without_delimiter() {
        assert_eq!(split_words("word"), vec!["word"]);
        assert_eq!(split_words(""), vec![""]);
    }

    #[test]
    fn test_split_words_whitespace_only() {
        assert!(split_words("   ").is_empty());
    }

    #[test]
    fn test_empty_tokens_count_as_words() {
        // Double space after the terminator leaves a leading empty token
        let stats = Statistics::from_text("Hi.  There now");
        assert_eq!(stats.sentences, 2);
        assert_eq!(stats.words, 4);
        assert_eq!(stats.syllables, 3);
    }

    #[test]
    fn test_characters_exclude_all_whitespace() {
        assert_eq!(count_characters("a b\tc\nd\r\ne"), 5);
        assert_eq!(count_characters("Hi, there!"), 9);
    }

    #[test]
    fn test_empty_text() {
        let stats = Statistics::from_text("");
        assert_eq!(stats, Statistics::default());
        assert!(stats.ensure_measurable().is_err());
    }

    #[test]
    fn test_whitespace_only_text() {
        let stats = Statistics::from_text(" \n\t ");
        assert_eq!(stats.sentences, 1);
        assert_eq!(stats.words, 0);
        assert_eq!(
            stats.ensure_measurable(),
            Err(ReadabilityError::EmptyInput {
                sentences: 1,
                words: 0
            })
        );
    }

    #[test]
    fn test_polysyllables_counted() {
        let stats = Statistics::from_text("A banana is wonderful.");
        assert_eq!(stats.words, 4);
        assert_eq!(stats.polysyllables, 2);
    }

    #[test]
    fn test_ratios() {
        let stats = Statistics::new(100, 5, 450, 150, 10);
        assert_eq!(stats.words_per_sentence(), 20.0);
        assert_eq!(stats.characters_per_word(), 4.5);
        assert_eq!(stats.syllables_per_word(), 1.5);
        assert_eq!(stats.sentences_per_word(), 0.05);
    }
}
