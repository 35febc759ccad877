//! Text analysis: tokenization and frequency ranking

/// Tokenization, stop word exclusion and counting
pub mod tokenizer;
/// Ranked word entries
pub mod word;

pub use tokenizer::{ExclusionSet, count_words, count_words_in_file};
pub use word::Word;
