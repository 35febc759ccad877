/// Command-line interface and batch processing
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Text measurement and rasterization
pub mod font;
/// Rendering and PNG export
pub mod image;
/// Colors and palettes
pub mod palette;
/// Terminal progress display
pub mod progress;
