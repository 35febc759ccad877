//! Color palettes and hex color parsing for command-line configuration

use crate::io::configuration::{DEFAULT_BACKGROUND, DEFAULT_PALETTE};
use crate::io::error::{Result, invalid_parameter};
use image::Rgba;

/// Ordered colors assigned to words by rank, wrapping around
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgba<u8>>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|&rgba| Rgba(rgba)).collect(),
        }
    }
}

impl Palette {
    /// Create a palette from explicit colors
    ///
    /// # Errors
    ///
    /// Returns an error if `colors` is empty
    pub fn new(colors: Vec<Rgba<u8>>) -> Result<Self> {
        if colors.is_empty() {
            return Err(invalid_parameter(
                "palette",
                &"[]",
                &"at least one color is required",
            ));
        }
        Ok(Self { colors })
    }

    /// Color for the word at `rank`
    pub fn color_for(&self, rank: usize) -> Rgba<u8> {
        self.colors
            .get(rank % self.colors.len().max(1))
            .copied()
            .unwrap_or(Rgba(DEFAULT_BACKGROUND))
    }

    /// Number of distinct colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional)
///
/// # Errors
///
/// Returns an error if the string is not 6 or 8 hex digits
pub fn parse_hex_color(input: &str) -> Result<Rgba<u8>> {
    let digits = input.trim().trim_start_matches('#');
    let invalid = || invalid_parameter("color", &input, &"expected #RRGGBB or #RRGGBBAA");

    if !(digits.len() == 6 || digits.len() == 8) || !digits.chars().all(|c| c.is_ascii_hexdigit())
    {
        return Err(invalid());
    }

    let mut channels = [0u8, 0, 0, 255];
    for (channel, start) in channels.iter_mut().zip((0..digits.len()).step_by(2)) {
        let pair = digits.get(start..start + 2).ok_or_else(invalid)?;
        *channel = u8::from_str_radix(pair, 16).map_err(|_parse_error| invalid())?;
    }
    Ok(Rgba(channels))
}

/// Parse a comma-separated list of hex colors into a palette
///
/// # Errors
///
/// Returns an error if any entry is malformed or the list is empty
pub fn parse_palette(input: &str) -> Result<Palette> {
    let colors = input
        .split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(parse_hex_color)
        .collect::<Result<Vec<_>>>()?;
    Palette::new(colors)
}
