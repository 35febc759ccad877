//! Word cloud generation: frequency-ranked words packed around the canvas center
//!
//! Text is tokenized and ranked by frequency, the top words are scaled to
//! font sizes and measured, and a random-walk layout places the largest words
//! first, letting each later word drift outwards from the center until it
//! finds free space. The placed words are then rasterized to a PNG.

#![forbid(unsafe_code)]

/// Glyph preparation, layout strategies and the pipeline executor
pub mod algorithm;
/// Tokenization and frequency ranking
pub mod analysis;
/// Input/output operations, fonts, rendering and error handling
pub mod io;
/// Font size normalization
pub mod math;
/// Rectangle geometry for glyph bounds
pub mod spatial;

pub use io::error::{CloudError, Result};
