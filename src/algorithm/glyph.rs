//! Sized and colored words ready for layout
//!
//! A [`Glyph`] only exists once its ink box has been measured, so its
//! dimensions are always known. Its position stays `None` until the layout
//! accepts a placement, and [`Glyph::bounds`] is guarded accordingly.

use crate::analysis::Word;
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::io::font::GlyphFace;
use crate::io::palette::Palette;
use crate::spatial::Rect;
use image::Rgba;

/// A word prepared for placement and rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    text: String,
    frequency: u32,
    display_size: u32,
    color: Rgba<u8>,
    width: u32,
    height: u32,
    position: Option<(i32, i32)>,
}

impl Glyph {
    /// Create an unplaced glyph with a measured ink box
    pub fn new(
        text: impl Into<String>,
        frequency: u32,
        display_size: u32,
        color: Rgba<u8>,
        (width, height): (u32, u32),
    ) -> Self {
        Self {
            text: text.into(),
            frequency,
            display_size,
            color,
            width,
            height,
            position: None,
        }
    }

    /// Normalized word text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Raw occurrence count from the source text
    pub const fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Font size in pixels after normalization
    pub const fn display_size(&self) -> u32 {
        self.display_size
    }

    /// Draw color
    pub const fn color(&self) -> Rgba<u8> {
        self.color
    }

    /// Ink box `(width, height)`
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Top-left corner, once placed
    pub const fn position(&self) -> Option<(i32, i32)> {
        self.position
    }

    /// Whether a position has been assigned
    pub const fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// Canvas rectangle covered by the glyph, once placed
    pub fn bounds(&self) -> Option<Rect> {
        self.position
            .map(|(x, y)| Rect::new(x, y, self.width, self.height))
    }

    /// Assign the final position
    pub const fn place_at(&mut self, x: i32, y: i32) {
        self.position = Some((x, y));
    }
}

/// Measure the ink box of `text` at `display_size`
///
/// # Errors
///
/// Returns an error if the face produces no ink for the text
pub fn size_glyph(face: &dyn GlyphFace, text: &str, display_size: u32) -> Result<(u32, u32)> {
    face.measure(text, display_size as f32).ok_or_else(|| {
        computation_error(
            "glyph sizing",
            &format!("'{text}' has no visible ink at size {display_size}"),
        )
    })
}

/// Build glyphs for the top words, assigning sizes and colors by rank
///
/// One glyph is produced per entry of `sizes`, pairing it with the word of
/// the same rank. With `fade` set, alpha decreases linearly with rank from
/// fully opaque. Either every glyph is produced or none is.
///
/// # Errors
///
/// Returns an error if:
/// - There are more sizes than words
/// - Any word cannot be measured
pub fn prepare_glyphs(
    words: &[Word],
    sizes: &[u32],
    face: &dyn GlyphFace,
    palette: &Palette,
    fade: bool,
) -> Result<Vec<Glyph>> {
    if sizes.len() > words.len() {
        return Err(invalid_parameter(
            "sizes",
            &sizes.len(),
            &format!("only {} words are available", words.len()),
        ));
    }

    let count = sizes.len();
    words
        .iter()
        .zip(sizes)
        .enumerate()
        .map(|(rank, (word, &display_size))| {
            let dimensions = size_glyph(face, word.text(), display_size)?;
            let mut color = palette.color_for(rank);
            if fade {
                color.0[3] = fade_alpha(rank, count);
            }
            Ok(Glyph::new(
                word.text(),
                word.frequency(),
                display_size,
                color,
                dimensions,
            ))
        })
        .collect()
}

/// Alpha for rank `rank` of `count`, from 255 down towards 0
pub const fn fade_alpha(rank: usize, count: usize) -> u8 {
    if count == 0 || rank >= count {
        return 0;
    }
    (255 * (count - rank) / count) as u8
}
