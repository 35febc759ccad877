//! Layout strategy seam between word preparation and placement
//!
//! A strategy decides where a single glyph goes given the rectangles already
//! on the canvas. Ordering, bookkeeping and overflow handling live in the
//! executor, so alternative placement algorithms only implement [`LayoutStrategy`].

use crate::io::configuration::MAX_CANVAS_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Rect;

/// Drawing area dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create a canvas, validating both dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds the size limit
    pub fn new(width: u32, height: u32) -> Result<Self> {
        for (parameter, value) in [("canvas_width", width), ("canvas_height", height)] {
            if value == 0 || value > MAX_CANVAS_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_CANVAS_DIMENSION}"),
                ));
            }
        }
        Ok(Self { width, height })
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The canvas as a rectangle at the origin
    pub const fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Whether a glyph of this size fits on the canvas at all
    pub const fn fits(&self, width: u32, height: u32) -> bool {
        width <= self.width && height <= self.height
    }
}

/// Result of trying to place one glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Accepted, non-overlapping, in-bounds rectangle
    Placed(Rect),
    /// The placement budget ran out
    Unplaced {
        /// Jitter attempts spent before giving up
        attempts: usize,
    },
}

/// What to do with a glyph that cannot be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Leave the glyph unplaced and continue with the next word
    #[default]
    Skip,
    /// Stop the layout with an error
    Abort,
}

/// Placement algorithm for glyph rectangles
pub trait LayoutStrategy {
    /// Find a position for a glyph of `size` that avoids every rectangle in `placed`
    ///
    /// `placed` is empty for the first glyph of a layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy itself fails; running out of room is
    /// reported as [`Placement::Unplaced`], not as an error
    fn place(&mut self, size: (u32, u32), placed: &[Rect], canvas: Canvas) -> Result<Placement>;
}
