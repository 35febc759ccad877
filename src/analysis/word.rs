//! Ranked word entries produced by frequency counting

use std::cmp::Ordering;
use std::fmt;

/// A distinct normalized token and how often it occurred
///
/// Equality is by text alone; two entries for the same token are the
/// same word regardless of count.
#[derive(Debug, Clone, Eq)]
pub struct Word {
    text: String,
    frequency: u32,
}

impl Word {
    /// Create a word from already normalized text
    pub const fn new(text: String, frequency: u32) -> Self {
        Self { text, frequency }
    }

    /// Normalized text (uppercase, apostrophes removed)
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of occurrences in the source document
    pub const fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Ranking order: higher frequency first, then alphabetical by text
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .frequency
            .cmp(&self.frequency)
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl std::hash::Hash for Word {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.text, self.frequency)
    }
}
