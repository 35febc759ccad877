use crate::{
    algorithm::glyph::{Glyph, prepare_glyphs},
    algorithm::random_walk::{LayoutConfig, RandomWalkLayout, is_free},
    algorithm::strategy::{Canvas, LayoutStrategy, OverflowPolicy, Placement},
    analysis::{ExclusionSet, Word, count_words, count_words_in_file},
    io::configuration::{
        DEFAULT_BACKGROUND, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_MAX_FONT_SIZE,
        DEFAULT_MAX_WORDS,
    },
    io::error::{CloudError, Result, computation_error, invalid_parameter},
    io::font::GlyphFace,
    io::image::render_cloud,
    io::palette::Palette,
    math::normalization::normalize_sizes,
    spatial::Rect,
};
use image::{Rgba, RgbaImage};
use log::{debug, warn};
use std::path::Path;

/// Everything a single word cloud run is parameterized by
#[derive(Clone, Debug)]
pub struct CloudConfig {
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Font size of the most frequent word
    pub max_font_size: u32,
    /// Number of top-ranked words to draw
    pub max_words: usize,
    /// Words dropped before counting
    pub excluded: ExclusionSet,
    /// Colors cycled by rank
    pub palette: Palette,
    /// Canvas fill color
    pub background: Rgba<u8>,
    /// Fade alpha with rank instead of drawing every word opaque
    pub fade: bool,
    /// Random walk parameters
    pub layout: LayoutConfig,
    /// Handling of words that cannot be placed
    pub overflow: OverflowPolicy,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            max_font_size: DEFAULT_MAX_FONT_SIZE,
            max_words: DEFAULT_MAX_WORDS,
            excluded: ExclusionSet::with_defaults(),
            palette: Palette::default(),
            background: Rgba(DEFAULT_BACKGROUND),
            fade: false,
            layout: LayoutConfig::default(),
            overflow: OverflowPolicy::default(),
        }
    }
}

impl CloudConfig {
    /// Validate all parameters and produce the canvas
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension, size or count is out of range
    pub fn validate(&self) -> Result<Canvas> {
        let canvas = Canvas::new(self.canvas_width, self.canvas_height)?;
        if self.max_font_size == 0 {
            return Err(invalid_parameter(
                "max_font_size",
                &self.max_font_size,
                &"must be at least 1",
            ));
        }
        if self.max_words == 0 {
            return Err(invalid_parameter(
                "max_words",
                &self.max_words,
                &"must be at least 1",
            ));
        }
        if self.palette.is_empty() {
            return Err(invalid_parameter(
                "palette",
                &"[]",
                &"at least one color is required",
            ));
        }
        self.layout.validate()?;
        Ok(canvas)
    }
}

/// Word cloud pipeline state for one document
///
/// Holds the full ranked word list, the glyphs prepared for the top words
/// and a placement cursor. Placement proceeds one glyph per
/// [`WordCloud::execute_step`] in rank order, so callers can report progress.
#[derive(Debug)]
pub struct WordCloud {
    config: CloudConfig,
    canvas: Canvas,
    ranked: Vec<Word>,
    glyphs: Vec<Glyph>,
    prepared: bool,
    cursor: usize,
    placed_bounds: Vec<Rect>,
    unplaced: usize,
}

impl WordCloud {
    /// Start a cloud from an already ranked word list
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or `ranked` is empty
    pub fn from_words(ranked: Vec<Word>, config: CloudConfig) -> Result<Self> {
        let canvas = config.validate()?;
        if ranked.is_empty() {
            return Err(CloudError::EmptyVocabulary {
                excluded: config.excluded.len(),
            });
        }
        Ok(Self {
            config,
            canvas,
            ranked,
            glyphs: Vec::new(),
            prepared: false,
            cursor: 0,
            placed_bounds: Vec::new(),
            unplaced: 0,
        })
    }

    /// Tokenize and rank `text`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or no word survives exclusion
    pub fn from_text(text: &str, config: CloudConfig) -> Result<Self> {
        config.validate()?;
        let ranked = count_words(text, &config.excluded)?;
        Self::from_words(ranked, config)
    }

    /// Read, tokenize and rank a text file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - The file cannot be read
    /// - No word survives exclusion
    pub fn from_file(path: &Path, config: CloudConfig) -> Result<Self> {
        config.validate()?;
        let ranked = count_words_in_file(path, &config.excluded)?;
        Self::from_words(ranked, config)
    }

    /// Configuration of this run
    pub const fn config(&self) -> &CloudConfig {
        &self.config
    }

    /// Canvas the layout targets
    pub const fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Every distinct word, ranked, including those beyond the drawn cutoff
    pub fn ranked_words(&self) -> &[Word] {
        &self.ranked
    }

    /// Number of words that will be drawn: the requested count clamped to the vocabulary
    pub fn max_words(&self) -> usize {
        self.config.max_words.min(self.ranked.len())
    }

    /// Prepared glyphs in rank order, placed or not
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Glyphs that received a position
    pub fn placed_glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.iter().filter(|glyph| glyph.is_placed())
    }

    /// Number of glyphs placed so far
    pub fn placed_count(&self) -> usize {
        self.placed_bounds.len()
    }

    /// Number of glyphs skipped for lack of room
    pub const fn unplaced_count(&self) -> usize {
        self.unplaced
    }

    /// Whether every prepared glyph has been processed
    pub fn is_complete(&self) -> bool {
        self.prepared && self.cursor >= self.glyphs.len()
    }

    /// Normalize sizes, measure and color the top words
    ///
    /// Any previous layout is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if a word cannot be measured; existing glyphs are left untouched
    pub fn prepare(&mut self, face: &dyn GlyphFace) -> Result<()> {
        let frequencies: Vec<u32> = self.ranked.iter().map(Word::frequency).collect();
        let sizes = normalize_sizes(
            &frequencies,
            self.config.max_words,
            self.config.max_font_size,
        );
        debug!(
            "Normalized {} of {} words, largest size {}",
            sizes.len(),
            self.ranked.len(),
            sizes.first().copied().unwrap_or(0)
        );

        let glyphs = prepare_glyphs(
            &self.ranked,
            &sizes,
            face,
            &self.config.palette,
            self.config.fade,
        )?;

        self.glyphs = glyphs;
        self.prepared = true;
        self.cursor = 0;
        self.placed_bounds.clear();
        self.unplaced = 0;
        Ok(())
    }

    /// Place the next glyph in rank order
    ///
    /// Returns `false` once there is nothing left to place.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The cloud has not been prepared
    /// - The strategy fails or returns an overlapping or out-of-bounds rectangle
    /// - A glyph cannot be placed under [`OverflowPolicy::Abort`]
    pub fn execute_step(&mut self, strategy: &mut dyn LayoutStrategy) -> Result<bool> {
        if !self.prepared {
            return Err(computation_error(
                "layout",
                &"glyphs must be prepared before placement",
            ));
        }

        let Some(glyph) = self.glyphs.get_mut(self.cursor) else {
            return Ok(false);
        };

        match strategy.place(glyph.size(), &self.placed_bounds, self.canvas)? {
            Placement::Placed(rect) => {
                if rect.width != glyph.size().0
                    || rect.height != glyph.size().1
                    || !is_free(&rect, &self.canvas.rect(), &self.placed_bounds)
                {
                    return Err(computation_error(
                        "layout",
                        &format!(
                            "strategy returned an invalid rectangle {rect:?} for '{}'",
                            glyph.text()
                        ),
                    ));
                }
                glyph.place_at(rect.x, rect.y);
                self.placed_bounds.push(rect);
            }
            Placement::Unplaced { attempts } => match self.config.overflow {
                OverflowPolicy::Skip => {
                    warn!(
                        "Skipping '{}' (size {}): no free space after {attempts} attempts",
                        glyph.text(),
                        glyph.display_size()
                    );
                    self.unplaced += 1;
                }
                OverflowPolicy::Abort => {
                    return Err(CloudError::PlacementStalled {
                        word: glyph.text().to_string(),
                        attempts,
                    });
                }
            },
        }

        self.cursor += 1;
        Ok(true)
    }

    /// Place every remaining glyph
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`WordCloud::execute_step`]
    pub fn layout(&mut self, strategy: &mut dyn LayoutStrategy) -> Result<()> {
        while self.execute_step(strategy)? {}
        Ok(())
    }

    /// Draw the placed glyphs onto a fresh canvas
    ///
    /// # Errors
    ///
    /// Returns an error if a glyph cannot be rasterized
    pub fn render(&self, face: &dyn GlyphFace) -> Result<RgbaImage> {
        render_cloud(self.placed_glyphs(), self.canvas, self.config.background, face)
    }
}

/// Run the whole pipeline on `text` with a seeded random walk
///
/// # Errors
///
/// Returns an error if any stage fails; see [`WordCloud`]
pub fn generate(
    text: &str,
    config: CloudConfig,
    face: &dyn GlyphFace,
    seed: u64,
) -> Result<(WordCloud, RgbaImage)> {
    let mut strategy = RandomWalkLayout::seeded(config.layout, seed);
    let mut cloud = WordCloud::from_text(text, config)?;
    cloud.prepare(face)?;
    cloud.layout(&mut strategy)?;
    let image = cloud.render(face)?;
    Ok((cloud, image))
}
