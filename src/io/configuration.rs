//! Layout constants and runtime configuration defaults

// Canvas defaults
/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 1200;
/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 800;

// Upper bound keeps a mistyped flag from allocating gigabytes
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: u32 = 20_000;

/// Default largest font size after normalization
pub const DEFAULT_MAX_FONT_SIZE: u32 = 160;

/// Default number of words drawn
pub const DEFAULT_MAX_WORDS: usize = 200;

// Random walk tuning
/// Largest jitter applied per axis on each placement attempt
pub const DEFAULT_MAX_JITTER: i32 = 8;

/// Attempts before a walk is reset to the canvas center
pub const DEFAULT_WALK_LENGTH: usize = 1_000_000;

/// Center resets allowed per word before it counts as unplaceable
pub const DEFAULT_MAX_RESTARTS: usize = 3;

// Words that dominate counts without carrying meaning
/// Stop words excluded unless disabled on the command line
pub const DEFAULT_EXCLUDED_WORDS: &[&str] = &[
    "at", "the", "than", "a", "then", "in", "on", "off", "this", "that", "of", "or", "and", "but",
    "too", "to", "was", "were", "by", "as", "also", "i", "am", "it", "we", "for", "our", "s",
    "i'm", "it's", "its", "do",
];

/// Default colors cycled by rank (blue, white, red)
pub const DEFAULT_PALETTE: &[[u8; 4]] = &[[30, 90, 240, 255], [255, 255, 255, 255], [255, 0, 0, 255]];

/// Default background color
pub const DEFAULT_BACKGROUND: [u8; 4] = [0, 0, 0, 255];

/// Default font family used for measurement and rendering
pub const DEFAULT_FONT_FAMILY: &str = "Times New Roman";

// Output settings
/// Prefix of generated image filenames
pub const OUTPUT_PREFIX: &str = "img";
/// Extension of generated image filenames
pub const OUTPUT_EXTENSION: &str = "png";
/// Extension of text files picked up when the target is a directory
pub const INPUT_EXTENSION: &str = "txt";
