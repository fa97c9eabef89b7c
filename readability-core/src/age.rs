//! Score to reader-age lookup
//!
//! Scores are grade-like values; rounding one to the nearest integer yields a
//! bucket in `1..=14` whose typical reader age is taken from the table. Values
//! follow the age column of the Automated Readability Index grade table.

use crate::error::{ReadabilityError, Result};

/// Lowest valid score bucket
pub const MIN_BUCKET: i64 = 1;

/// Highest valid score bucket; scores above it are open-ended
pub const MAX_BUCKET: i64 = 14;

/// Number of buckets in an age table
pub const BUCKET_COUNT: usize = (MAX_BUCKET - MIN_BUCKET + 1) as usize;

/// Standard reader ages for buckets 1 through 14
pub const STANDARD_AGES: [u32; BUCKET_COUNT] = [
    6, 7, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 24, 24,
];

/// Immutable mapping from score bucket to reader age
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeTable {
    ages: [u32; BUCKET_COUNT],
}

impl Default for AgeTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl AgeTable {
    /// The standard table: 1→6, 2→7, 3..=12→9..=18, 13→24, 14→24
    pub const STANDARD: AgeTable = AgeTable {
        ages: STANDARD_AGES,
    };

    /// Build a table from exactly fourteen ages, ordered by bucket
    ///
    /// Ages must be positive and must not decrease from one bucket to the next.
    pub fn from_ages(ages: &[u32]) -> Result<Self> {
        let ages: [u32; BUCKET_COUNT] = ages.try_into().map_err(|_| {
            ReadabilityError::Configuration(format!(
                "age table needs exactly {BUCKET_COUNT} entries, got {}",
                ages.len()
            ))
        })?;

        if let Some(position) = ages.iter().position(|&age| age == 0) {
            return Err(ReadabilityError::Configuration(format!(
                "age for bucket {} must be greater than 0",
                position as i64 + MIN_BUCKET
            )));
        }

        if let Some(position) = ages.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(ReadabilityError::Configuration(format!(
                "age for bucket {} is lower than the age for bucket {}",
                position as i64 + MIN_BUCKET + 1,
                position as i64 + MIN_BUCKET
            )));
        }

        Ok(Self { ages })
    }

    /// Ages ordered by bucket
    pub fn ages(&self) -> &[u32] {
        &self.ages
    }

    /// Age for an integer bucket in `1..=14`
    pub fn age_for_bucket(&self, bucket: i64) -> Option<u32> {
        if (MIN_BUCKET..=MAX_BUCKET).contains(&bucket) {
            Some(self.ages[(bucket - MIN_BUCKET) as usize])
        } else {
            None
        }
    }

    /// Resolve the age for a raw score
    ///
    /// The score is rounded half away from zero. A bucket outside `1..=14`,
    /// including one produced by a non-finite score, is an error.
    pub fn lookup(&self, score: f64) -> Result<u32> {
        let rounded = score.round();
        let out_of_range = || ReadabilityError::ScoreOutOfRange {
            score,
            rounded: if rounded.is_finite() { rounded as i64 } else { 0 },
        };

        if !rounded.is_finite() {
            return Err(out_of_range());
        }

        self.age_for_bucket(rounded as i64).ok_or_else(out_of_range)
    }
}
