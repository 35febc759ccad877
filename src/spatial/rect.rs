//! Integer axis-aligned rectangles for glyph bounds
//!
//! Edges are half-open: a rectangle covers `[x, x + width) x [y, y + height)`,
//! so two rectangles that only share an edge do not intersect.

/// Axis-aligned rectangle in canvas pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge (inclusive)
    pub x: i32,
    /// Top edge (inclusive)
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centered in a `canvas_width` x `canvas_height` area
    ///
    /// Uses integer halving on both terms, `x = W/2 - w/2`, so the result may be
    /// negative when the rectangle is larger than the area.
    pub const fn centered(width: u32, height: u32, canvas_width: u32, canvas_height: u32) -> Self {
        let x = (canvas_width / 2) as i64 - (width / 2) as i64;
        let y = (canvas_height / 2) as i64 - (height / 2) as i64;
        Self::new(x as i32, y as i32, width, height)
    }

    /// Exclusive right edge
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge
    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Same rectangle shifted by `(dx, dy)`, saturating at the `i32` range
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    /// Whether `other` lies entirely inside this rectangle
    pub const fn contains(&self, other: &Self) -> bool {
        other.x as i64 >= self.x as i64
            && other.y as i64 >= self.y as i64
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Whether the two rectangles share any pixel
    ///
    /// Empty rectangles never intersect anything.
    pub const fn intersects(&self, other: &Self) -> bool {
        if self.width == 0 || self.height == 0 || other.width == 0 || other.height == 0 {
            return false;
        }
        (self.x as i64) < other.right()
            && (other.x as i64) < self.right()
            && (self.y as i64) < other.bottom()
            && (other.y as i64) < self.bottom()
    }
}
