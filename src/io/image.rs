//! Cloud rendering and PNG export with unique timestamped filenames

use crate::algorithm::glyph::Glyph;
use crate::algorithm::strategy::Canvas;
use crate::io::configuration::{OUTPUT_EXTENSION, OUTPUT_PREFIX};
use crate::io::error::{CloudError, Result, computation_error};
use crate::io::font::{GlyphFace, GlyphRaster};
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Draw placed glyphs over a filled background
///
/// Unplaced glyphs are ignored. Each glyph is rasterized at its display size
/// and its ink box drawn with the top-left corner at the glyph position.
///
/// # Errors
///
/// Returns an error if the face cannot rasterize a glyph
pub fn render_cloud<'a>(
    glyphs: impl IntoIterator<Item = &'a Glyph>,
    canvas: Canvas,
    background: Rgba<u8>,
    face: &dyn GlyphFace,
) -> Result<RgbaImage> {
    let mut img = RgbaImage::from_pixel(canvas.width(), canvas.height(), background);

    for glyph in glyphs {
        let Some((x, y)) = glyph.position() else {
            continue;
        };
        let raster = face
            .rasterize(glyph.text(), glyph.display_size() as f32)
            .ok_or_else(|| {
                computation_error("rendering", &format!("'{}' has no ink", glyph.text()))
            })?;
        draw_raster(&mut img, &raster, x, y, glyph.color());
    }

    Ok(img)
}

/// Composite a coverage mask in `color` at `(x, y)`, clipping to the image
///
/// Each pixel moves towards `color` by its coverage scaled by the color's
/// alpha. Destination alpha is combined source-over, so an opaque
/// background stays fully opaque under anti-aliased edges.
pub fn draw_raster(img: &mut RgbaImage, raster: &GlyphRaster, x: i32, y: i32, color: Rgba<u8>) {
    let [red, green, blue, alpha] = color.0;
    let opacity = f32::from(alpha) / 255.0;

    for ((row, col), &coverage) in raster.coverage().indexed_iter() {
        let weight = coverage.clamp(0.0, 1.0) * opacity;
        if weight <= 0.0 {
            continue;
        }
        let px = i64::from(x) + col as i64;
        let py = i64::from(y) + row as i64;
        if px < 0 || py < 0 || px >= i64::from(img.width()) || py >= i64::from(img.height()) {
            continue;
        }

        let pixel = img.get_pixel_mut(px as u32, py as u32);
        let [dst_red, dst_green, dst_blue, dst_alpha] = pixel.0;
        *pixel = Rgba([
            mix(dst_red, red, weight),
            mix(dst_green, green, weight),
            mix(dst_blue, blue, weight),
            mix(dst_alpha, u8::MAX, weight),
        ]);
    }
}

// Linear interpolation from `from` towards `to`, rounded to the nearest level
fn mix(from: u8, to: u8, weight: f32) -> u8 {
    let from = f32::from(from);
    (from + (f32::from(to) - from) * weight)
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Pick an unused `img<millis>.png` path inside `directory`
///
/// Starts from the current time and counts upwards past existing files.
///
/// # Errors
///
/// Returns an error if the system clock is before the Unix epoch
pub fn unique_output_path(directory: &Path) -> Result<PathBuf> {
    let mut millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| computation_error("output naming", &e))?
        .as_millis();

    loop {
        let candidate = directory.join(format!("{OUTPUT_PREFIX}{millis}.{OUTPUT_EXTENSION}"));
        if !candidate.exists() {
            return Ok(candidate);
        }
        millis += 1;
    }
}

/// Write `img` as a PNG with a generated unique name in `directory`
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The image cannot be encoded or written
pub fn export_png(img: &RgbaImage, directory: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(directory).map_err(|e| CloudError::FileSystem {
        path: directory.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    let path = unique_output_path(directory)?;
    img.save_with_format(&path, ImageFormat::Png)
        .map_err(|e| CloudError::EncodeFailure {
            path: path.clone(),
            source: e,
        })?;

    Ok(path)
}
