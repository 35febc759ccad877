//! Command-line interface for batch word cloud generation from text files

use crate::algorithm::executor::{CloudConfig, WordCloud};
use crate::algorithm::random_walk::{LayoutConfig, RandomWalkLayout};
use crate::algorithm::strategy::OverflowPolicy;
use crate::analysis::ExclusionSet;
use crate::io::configuration::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_FONT_FAMILY, DEFAULT_MAX_FONT_SIZE,
    DEFAULT_MAX_JITTER, DEFAULT_MAX_RESTARTS, DEFAULT_MAX_WORDS, DEFAULT_WALK_LENGTH,
    INPUT_EXTENSION,
};
use crate::io::error::{CloudError, Result};
use crate::io::font::{FontSource, GlyphFace, TrueTypeFace};
use crate::io::image::export_png;
use crate::io::palette::{Palette, parse_hex_color, parse_palette};
use crate::io::progress::ProgressManager;
use clap::Parser;
use image::Rgba;
use indicatif::MultiProgress;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[command(name = "wordcloud")]
#[command(
    author,
    version,
    about = "Render frequency-weighted word clouds from text files"
)]
/// Command-line arguments for the word cloud tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input text file or directory of .txt files to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible layouts (defaults to the current time)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Canvas width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub height: u32,

    /// Font size of the most frequent word
    #[arg(short = 'f', long, default_value_t = DEFAULT_MAX_FONT_SIZE)]
    pub max_font_size: u32,

    /// Maximum number of words drawn
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_WORDS)]
    pub max_words: usize,

    /// Additional words to exclude (comma separated, case-insensitive)
    #[arg(short = 'x', long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Do not exclude the built-in stop words
    #[arg(long)]
    pub no_default_excludes: bool,

    /// Word colors as comma separated hex values, cycled by rank
    #[arg(short, long, value_parser = parse_palette_arg)]
    pub palette: Option<Palette>,

    /// Background color as a hex value
    #[arg(short, long, value_parser = parse_color_arg)]
    pub background: Option<Rgba<u8>>,

    /// Installed font family used to measure and draw words
    #[arg(long, default_value = DEFAULT_FONT_FAMILY)]
    pub font_family: String,

    /// Font file to use instead of an installed family
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Directory receiving generated images
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Fade word opacity with rank
    #[arg(long)]
    pub fade: bool,

    /// Largest random step per axis during placement
    #[arg(long, default_value_t = DEFAULT_MAX_JITTER)]
    pub max_jitter: i32,

    /// Placement attempts before a walk restarts from the center
    #[arg(long, default_value_t = DEFAULT_WALK_LENGTH)]
    pub walk_length: usize,

    /// Restarts allowed per word before it is skipped
    #[arg(long, default_value_t = DEFAULT_MAX_RESTARTS)]
    pub max_restarts: usize,

    /// Fail instead of skipping words that do not fit
    #[arg(long)]
    pub abort_on_overflow: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_palette_arg(value: &str) -> std::result::Result<Palette, String> {
    parse_palette(value).map_err(|e| e.to_string())
}

fn parse_color_arg(value: &str) -> std::result::Result<Rgba<u8>, String> {
    parse_hex_color(value).map_err(|e| e.to_string())
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Where fonts come from: an explicit file wins over the family name
    pub fn font_source(&self) -> FontSource {
        self.font.as_ref().map_or_else(
            || FontSource::Family(self.font_family.clone()),
            |path| FontSource::File(path.clone()),
        )
    }

    /// Assemble the pipeline configuration from the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid
    pub fn cloud_config(&self) -> Result<CloudConfig> {
        let mut excluded = if self.no_default_excludes {
            ExclusionSet::default()
        } else {
            ExclusionSet::with_defaults()
        };
        excluded.extend(&self.exclude);

        let defaults = CloudConfig::default();
        let config = CloudConfig {
            canvas_width: self.width,
            canvas_height: self.height,
            max_font_size: self.max_font_size,
            max_words: self.max_words,
            excluded,
            palette: self.palette.clone().unwrap_or(defaults.palette),
            background: self.background.unwrap_or(defaults.background),
            fade: self.fade,
            layout: LayoutConfig {
                max_jitter: self.max_jitter,
                walk_length: self.walk_length,
                max_restarts: self.max_restarts,
            },
            overflow: if self.abort_on_overflow {
                OverflowPolicy::Abort
            } else {
                OverflowPolicy::Skip
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// The seed to use, falling back to the clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |elapsed| elapsed.as_millis() as u64)
        })
    }
}

/// Orchestrates batch processing of text files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Progress display to suspend while logging, if progress is shown
    pub fn multi_progress(&self) -> Option<MultiProgress> {
        self.progress_manager
            .as_ref()
            .map(|pm| pm.multi_progress().clone())
    }

    /// Load the configured font and process every target file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The arguments do not form a valid configuration
    /// - The font cannot be loaded
    /// - The target cannot be read
    /// - A file fails with anything other than an empty vocabulary
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let config = self.cli.cloud_config()?;
        let face = TrueTypeFace::load(&self.cli.font_source())?;
        info!("Using font '{}'", face.name());
        self.process_with_face(&config, &face)
    }

    /// Process every target file with an already loaded face
    ///
    /// Returns the paths of the images written. Documents without any
    /// countable word are reported and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot be read or a file fails fatally
    pub fn process_with_face(
        &mut self,
        config: &CloudConfig,
        face: &dyn GlyphFace,
    ) -> Result<Vec<PathBuf>> {
        let files = self.collect_files()?;
        let mut written = Vec::with_capacity(files.len());

        if files.is_empty() {
            warn!("No .{INPUT_EXTENSION} files found in {}", self.cli.target.display());
            return Ok(written);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let seed = self.cli.resolve_seed();
        info!("Layout seed {seed}");

        for file in &files {
            let outcome = self.process_file(file, config, face, seed);
            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_file();
            }

            match outcome {
                Ok(path) => written.push(path),
                Err(error) if error.is_recoverable() => {
                    warn!("{}: {error}", file.display());
                }
                Err(error) => {
                    if let Some(ref mut pm) = self.progress_manager {
                        pm.finish();
                    }
                    return Err(error);
                }
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    /// Files named by the target argument, sorted
    ///
    /// # Errors
    ///
    /// Returns an error if the target does not exist or the directory cannot be listed
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            Ok(vec![target.clone()])
        } else if target.is_dir() {
            let read_dir_error = |source| CloudError::FileSystem {
                path: target.clone(),
                operation: "list directory",
                source,
            };
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).map_err(read_dir_error)? {
                let path = entry.map_err(read_dir_error)?.path();
                if path.is_file()
                    && path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(CloudError::InputNotFound {
                path: target.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "target must be a text file or directory",
                ),
            })
        }
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        config: &CloudConfig,
        face: &dyn GlyphFace,
        seed: u64,
    ) -> Result<PathBuf> {
        let start_time = Instant::now();

        let mut cloud = WordCloud::from_file(input_path, config.clone())?;
        cloud.prepare(face)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(input_path, cloud.glyphs().len());
        }

        let mut strategy = RandomWalkLayout::seeded(config.layout, seed);
        while cloud.execute_step(&mut strategy)? {
            if let Some(ref pm) = self.progress_manager {
                pm.record_step(cloud.placed_count(), cloud.unplaced_count());
            }
        }

        let image = cloud.render(face)?;
        let output_path = export_png(&image, &self.cli.output_dir)?;

        info!(
            "File: {} created from {} ({} of {} words placed, {} skipped, {:.2?})",
            output_path.display(),
            input_path.display(),
            cloud.placed_count(),
            cloud.ranked_words().len(),
            cloud.unplaced_count(),
            start_time.elapsed()
        );

        Ok(output_path)
    }
}
