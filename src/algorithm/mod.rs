/// Word cloud pipeline orchestration and stepwise placement
pub mod executor;
/// Sized and colored glyphs
pub mod glyph;
/// Random-walk placement
pub mod random_walk;
/// Layout strategy trait and canvas
pub mod strategy;
