//! Heuristic syllable estimation
//!
//! Syllables are approximated by counting vowel runs rather than consulting a
//! dictionary. The heuristic is deliberately simple and its imprecision is part
//! of the contract: scores computed from it must stay comparable over time.

/// Vowels recognised by the estimator, `y` included
const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Words estimated above this many syllables count as polysyllables
pub const POLYSYLLABLE_THRESHOLD: usize = 2;

/// Check whether a lower-cased character is a vowel
#[inline]
pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

/// Estimate the syllables in a single whitespace-free token
///
/// Rules, applied to the lower-cased token:
/// 1. a trailing `e` is silent and pre-discounts one syllable;
/// 2. every maximal vowel run counts once, attributed to its last vowel;
/// 3. a vowel in the final position always counts;
/// 4. any non-empty token has at least one syllable.
///
/// The empty token (left behind by consecutive delimiters) has zero syllables.
pub fn estimate_syllables(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }

    let letters: Vec<char> = word.chars().map(|c| c.to_ascii_lowercase()).collect();
    let mut count: i64 = if letters.last() == Some(&'e') { -1 } else { 0 };

    for (i, &ch) in letters.iter().enumerate() {
        if !is_vowel(ch) {
            continue;
        }
        match letters.get(i + 1) {
            None => count += 1,
            Some(&next) if !is_vowel(next) => count += 1,
            Some(_) => {}
        }
    }

    count.max(1) as usize
}

/// Check whether a word counts as a polysyllable
pub fn is_polysyllable(word: &str) -> bool {
    estimate_syllables(word) > POLYSYLLABLE_THRESHOLD
}
