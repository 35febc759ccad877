//! Random-walk glyph placement
//!
//! The first glyph is centered exactly. Every later glyph starts with its
//! top-left corner at the canvas center and drifts by small random steps,
//! each step translating the previous candidate, until it lands somewhere
//! in bounds and clear of every placed rectangle. Large words are placed
//! first, so they claim the middle and smaller words wander into the gaps.
//!
//! A walk that runs `walk_length` steps without success restarts from the
//! center; after `max_restarts` restarts the glyph is reported unplaced.

use crate::algorithm::strategy::{Canvas, LayoutStrategy, Placement};
use crate::io::configuration::{DEFAULT_MAX_JITTER, DEFAULT_MAX_RESTARTS, DEFAULT_WALK_LENGTH};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Rect;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Random walk parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Largest step per axis; steps are uniform in `[-max_jitter, max_jitter]`
    pub max_jitter: i32,
    /// Steps before the walk restarts from the center
    pub walk_length: usize,
    /// Restarts allowed per glyph before giving up
    pub max_restarts: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_jitter: DEFAULT_MAX_JITTER,
            walk_length: DEFAULT_WALK_LENGTH,
            max_restarts: DEFAULT_MAX_RESTARTS,
        }
    }
}

impl LayoutConfig {
    /// Check that the walk can make progress
    ///
    /// # Errors
    ///
    /// Returns an error if the jitter or walk length is not positive
    pub fn validate(&self) -> Result<()> {
        if self.max_jitter < 1 {
            return Err(invalid_parameter(
                "max_jitter",
                &self.max_jitter,
                &"must be at least 1",
            ));
        }
        if self.walk_length == 0 {
            return Err(invalid_parameter(
                "walk_length",
                &self.walk_length,
                &"must be at least 1",
            ));
        }
        Ok(())
    }

    /// Upper bound on attempts spent on a single glyph
    pub const fn attempt_budget(&self) -> usize {
        self.walk_length
            .saturating_mul(self.max_restarts.saturating_add(1))
    }
}

/// Random-walk layout with an injectable random source
#[derive(Debug, Clone)]
pub struct RandomWalkLayout<R = StdRng> {
    config: LayoutConfig,
    rng: R,
}

impl RandomWalkLayout<StdRng> {
    /// Create a deterministic layout seeded with `seed`
    pub fn seeded(config: LayoutConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomWalkLayout<R> {
    /// Create a layout drawing its steps from `rng`
    pub const fn with_rng(config: LayoutConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Walk parameters in use
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    fn step(&mut self) -> (i32, i32) {
        let jitter = self.config.max_jitter;
        (
            self.rng.random_range(-jitter..=jitter),
            self.rng.random_range(-jitter..=jitter),
        )
    }
}

/// Whether `candidate` is inside `bounds` and clear of every placed rectangle
pub fn is_free(candidate: &Rect, bounds: &Rect, placed: &[Rect]) -> bool {
    bounds.contains(candidate) && !placed.iter().any(|other| other.intersects(candidate))
}

impl<R: Rng> LayoutStrategy for RandomWalkLayout<R> {
    fn place(&mut self, size: (u32, u32), placed: &[Rect], canvas: Canvas) -> Result<Placement> {
        let (width, height) = size;
        if !canvas.fits(width, height) {
            return Ok(Placement::Unplaced { attempts: 0 });
        }

        if placed.is_empty() {
            return Ok(Placement::Placed(Rect::centered(
                width,
                height,
                canvas.width(),
                canvas.height(),
            )));
        }

        let bounds = canvas.rect();
        let start = Rect::new(
            (canvas.width() / 2) as i32,
            (canvas.height() / 2) as i32,
            width,
            height,
        );

        let mut attempts = 0usize;
        for _restart in 0..=self.config.max_restarts {
            let mut candidate = start;
            for _ in 0..self.config.walk_length {
                attempts += 1;
                let (dx, dy) = self.step();
                candidate = candidate.translated(dx, dy);
                if is_free(&candidate, &bounds, placed) {
                    return Ok(Placement::Placed(candidate));
                }
            }
        }

        Ok(Placement::Unplaced { attempts })
    }
}
