//! Text measurement and glyph rasterization
//!
//! Layout needs the exact ink box of a word at a given size, and rendering
//! must draw into exactly that box, so both come from the same face through
//! [`GlyphFace`]. [`TrueTypeFace`] is the production implementation backed by
//! `rusttype`, with system font discovery through `fontdb`.

use crate::io::error::{CloudError, Result};
use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use ndarray::Array2;
use rusttype::{Font, Scale, point};
use std::fmt;
use std::path::{Path, PathBuf};

/// Anti-aliased coverage of a rendered word, one value in `[0, 1]` per pixel
///
/// Indexed `[row, col]`; the array shape is `(height, width)` of the ink box.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRaster {
    coverage: Array2<f32>,
}

impl GlyphRaster {
    /// Wrap a coverage mask
    pub const fn new(coverage: Array2<f32>) -> Self {
        Self { coverage }
    }

    /// Width of the ink box in pixels
    pub fn width(&self) -> u32 {
        self.coverage.ncols() as u32
    }

    /// Height of the ink box in pixels
    pub fn height(&self) -> u32 {
        self.coverage.nrows() as u32
    }

    /// Coverage values indexed `[row, col]`
    pub const fn coverage(&self) -> &Array2<f32> {
        &self.coverage
    }
}

/// Text-measurement collaborator used by glyph sizing and rendering
pub trait GlyphFace {
    /// Exact ink bounding box `(width, height)` of `text` at `size` pixels
    ///
    /// Returns `None` if the text produces no visible ink.
    fn measure(&self, text: &str, size: f32) -> Option<(u32, u32)>;

    /// Coverage mask of `text` at `size` pixels, cropped to the ink box
    ///
    /// The mask dimensions must equal [`GlyphFace::measure`] for the same input.
    fn rasterize(&self, text: &str, size: f32) -> Option<GlyphRaster>;
}

/// Where to obtain font data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A TrueType/OpenType file on disk
    File(PathBuf),
    /// An installed family, looked up among system fonts
    Family(String),
}

/// TrueType face rendered with `rusttype`
pub struct TrueTypeFace {
    font: Font<'static>,
    name: String,
}

impl fmt::Debug for TrueTypeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrueTypeFace")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl TrueTypeFace {
    /// Load a face from either source
    ///
    /// # Errors
    ///
    /// Returns an error if the font cannot be found, read or parsed
    pub fn load(source: &FontSource) -> Result<Self> {
        match source {
            FontSource::File(path) => Self::from_file(path),
            FontSource::Family(family) => Self::from_family(family),
        }
    }

    /// Parse font data, selecting face `index` within a collection
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not a parseable font
    pub fn from_bytes(data: Vec<u8>, index: u32, name: &str) -> Result<Self> {
        let font = Font::try_from_vec_and_index(data, index).ok_or_else(|| CloudError::FontLoad {
            font: name.to_string(),
            reason: "unsupported or corrupt font data".to_string(),
        })?;
        Ok(Self {
            font,
            name: name.to_string(),
        })
    }

    /// Load the first face of a font file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| CloudError::FontLoad {
            font: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_bytes(data, 0, &path.display().to_string())
    }

    /// Find an installed family, falling back to the system serif and sans-serif faces
    ///
    /// # Errors
    ///
    /// Returns an error if no matching or fallback font is installed
    pub fn from_family(family: &str) -> Result<Self> {
        let mut db = Database::new();
        db.load_system_fonts();

        let families = [Family::Name(family), Family::Serif, Family::SansSerif];
        let query = Query {
            families: &families,
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
        };

        let id = db.query(&query).ok_or_else(|| CloudError::FontLoad {
            font: family.to_string(),
            reason: format!("no installed font matches (searched {} faces)", db.len()),
        })?;

        let resolved = db
            .face(id)
            .and_then(|face| face.families.first())
            .map_or_else(|| family.to_string(), |(name, _)| name.clone());
        if !resolved.eq_ignore_ascii_case(family) {
            log::warn!("Font family '{family}' not installed, using '{resolved}'");
        }

        let (data, index) = db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| CloudError::FontLoad {
                font: resolved.clone(),
                reason: "font data could not be loaded".to_string(),
            })?;
        Self::from_bytes(data, index, &resolved)
    }

    /// Name of the family or file this face was loaded from
    pub fn name(&self) -> &str {
        &self.name
    }

    // Union of the per-glyph pixel boxes, origin at the pen start on the ascent line
    fn ink_box(&self, text: &str, scale: Scale) -> Option<rusttype::Rect<i32>> {
        let offset = point(0.0, self.font.v_metrics(scale).ascent);
        self.font
            .layout(text, scale, offset)
            .filter_map(|glyph| glyph.pixel_bounding_box())
            .reduce(|a, b| rusttype::Rect {
                min: point(a.min.x.min(b.min.x), a.min.y.min(b.min.y)),
                max: point(a.max.x.max(b.max.x), a.max.y.max(b.max.y)),
            })
    }
}

impl GlyphFace for TrueTypeFace {
    fn measure(&self, text: &str, size: f32) -> Option<(u32, u32)> {
        let ink = self.ink_box(text, Scale::uniform(size))?;
        Some((ink.width() as u32, ink.height() as u32))
    }

    fn rasterize(&self, text: &str, size: f32) -> Option<GlyphRaster> {
        let scale = Scale::uniform(size);
        let ink = self.ink_box(text, scale)?;
        let mut coverage = Array2::<f32>::zeros((ink.height() as usize, ink.width() as usize));

        let offset = point(0.0, self.font.v_metrics(scale).ascent);
        for glyph in self.font.layout(text, scale, offset) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, v| {
                let row = (bb.min.y - ink.min.y) as usize + gy as usize;
                let col = (bb.min.x - ink.min.x) as usize + gx as usize;
                if let Some(cell) = coverage.get_mut([row, col]) {
                    // Kerned neighbours can overlap by a pixel
                    *cell = (*cell + v).min(1.0);
                }
            });
        }

        Some(GlyphRaster::new(coverage))
    }
}
