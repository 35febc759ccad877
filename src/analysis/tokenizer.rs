//! Tokenization and frequency ranking of source text
//!
//! Tokens are maximal runs of ASCII letters and apostrophes. Apostrophes are
//! dropped and the remainder upper-cased, so `don't`, `Dont` and `DONT` all
//! count towards `DONT`. Counting goes through an ordered map, which yields
//! the alphabetical tie-break for equal frequencies once the entries are
//! stably sorted by count.

use crate::analysis::word::Word;
use crate::io::configuration::DEFAULT_EXCLUDED_WORDS;
use crate::io::error::{CloudError, Result, computation_error};
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

/// Maximal runs of ASCII letters and apostrophes
pub const TOKEN_PATTERN: &str = "[A-Za-z']+";

static TOKEN_REGEX: LazyLock<std::result::Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(TOKEN_PATTERN));

/// Normalize a raw token the way counted words are normalized
pub fn normalize_token(token: &str) -> String {
    token
        .chars()
        .filter(|&c| c != '\'')
        .flat_map(char::to_uppercase)
        .collect()
}

/// Case-insensitive set of words that never reach the ranked list
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    words: HashSet<String>,
}

impl ExclusionSet {
    /// Build a set from arbitrary-case entries
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        set.extend(words);
        set
    }

    /// The built-in stop word list
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_EXCLUDED_WORDS.iter().copied())
    }

    /// Add more entries; blank entries are ignored
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .map(|word| normalize_token(word.as_ref().trim()))
                .filter(|word| !word.is_empty()),
        );
    }

    /// Whether a normalized token is excluded
    pub fn contains(&self, normalized: &str) -> bool {
        self.words.contains(normalized)
    }

    /// Number of distinct excluded entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether nothing is excluded
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Count word occurrences and rank them by frequency
///
/// # Errors
///
/// Returns [`CloudError::EmptyVocabulary`] if no token survives exclusion
pub fn count_words(text: &str, excluded: &ExclusionSet) -> Result<Vec<Word>> {
    let pattern = TOKEN_REGEX
        .as_ref()
        .map_err(|e| computation_error("tokenize", e))?;

    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    for token in pattern.find_iter(text) {
        let normalized = normalize_token(token.as_str());
        // A token made only of apostrophes normalizes to nothing
        if normalized.is_empty() || excluded.contains(&normalized) {
            continue;
        }
        let count = counts.entry(normalized).or_insert(0);
        *count = count.saturating_add(1);
    }

    if counts.is_empty() {
        return Err(CloudError::EmptyVocabulary {
            excluded: excluded.len(),
        });
    }

    let mut ranked: Vec<Word> = counts
        .into_iter()
        .map(|(text, frequency)| Word::new(text, frequency))
        .collect();
    ranked.sort_by(Word::rank_cmp);
    Ok(ranked)
}

/// Read a text file and rank its words
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
///
/// # Errors
///
/// Returns an error if:
/// - The file is missing or unreadable
/// - No token survives exclusion
pub fn count_words_in_file(path: &Path, excluded: &ExclusionSet) -> Result<Vec<Word>> {
    let bytes = std::fs::read(path).map_err(|source| CloudError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    count_words(&String::from_utf8_lossy(&bytes), excluded)
}
