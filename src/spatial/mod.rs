//! Spatial primitives for glyph placement
//!
//! Rectangles are the only geometry the layout needs: glyph ink boxes, the
//! canvas itself and the overlap and containment tests between them.

/// Axis-aligned integer rectangles
pub mod rect;

pub use rect::Rect;
