//! Tests for random-walk placement, its budget and reproducibility

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use wordcloud::CloudError;
    use wordcloud::algorithm::random_walk::{LayoutConfig, RandomWalkLayout, is_free};
    use wordcloud::algorithm::strategy::{Canvas, LayoutStrategy, Placement};
    use wordcloud::spatial::Rect;

    fn short_walk() -> LayoutConfig {
        LayoutConfig {
            max_jitter: 8,
            walk_length: 10_000,
            max_restarts: 3,
        }
    }

    // Places `count` equal glyphs, collecting what was placed
    fn place_many(layout: &mut impl LayoutStrategy, canvas: Canvas, count: usize) -> Vec<Rect> {
        let mut placed = Vec::new();
        for _ in 0..count {
            if let Ok(Placement::Placed(rect)) = layout.place((40, 20), &placed, canvas) {
                placed.push(rect);
            }
        }
        placed
    }

    // Tests that the first glyph is centered exactly
    // Verified by starting the first glyph at the raw canvas center
    #[test]
    fn test_first_glyph_centered() {
        let canvas = Canvas::new(400, 200).expect("valid canvas");
        let mut layout = RandomWalkLayout::seeded(short_walk(), 1);

        let placement = layout.place((100, 40), &[], canvas).expect("placement");
        assert_eq!(placement, Placement::Placed(Rect::new(150, 80, 100, 40)));
    }

    // Tests that oversized glyphs fail immediately
    #[test]
    fn test_oversized_glyph_unplaced() {
        let canvas = Canvas::new(100, 100).expect("valid canvas");
        let mut layout = RandomWalkLayout::seeded(short_walk(), 1);

        let placement = layout.place((101, 10), &[], canvas).expect("placement");
        assert_eq!(placement, Placement::Unplaced { attempts: 0 });
    }

    // Tests that every placement is in bounds and disjoint from earlier ones
    // Verified by skipping the overlap check
    #[test]
    fn test_placements_disjoint_and_in_bounds() {
        let canvas = Canvas::new(400, 300).expect("valid canvas");
        let mut layout = RandomWalkLayout::seeded(short_walk(), 42);

        let placed = place_many(&mut layout, canvas, 20);
        assert_eq!(placed.len(), 20);

        for (i, rect) in placed.iter().enumerate() {
            assert!(canvas.rect().contains(rect), "{rect:?} escapes the canvas");
            assert_eq!((rect.width, rect.height), (40, 20));
            let earlier = placed.get(..i).unwrap_or(&[]);
            assert!(is_free(rect, &canvas.rect(), earlier), "{rect:?} overlaps");
        }
    }

    // Tests that a full canvas exhausts exactly the configured budget
    // Verified by giving up after the first walk
    #[test]
    fn test_budget_exhausted() {
        let canvas = Canvas::new(200, 200).expect("valid canvas");
        let config = LayoutConfig {
            max_jitter: 4,
            walk_length: 25,
            max_restarts: 2,
        };
        let mut layout = RandomWalkLayout::seeded(config, 7);

        let placement = layout
            .place((10, 10), &[canvas.rect()], canvas)
            .expect("placement");
        assert_eq!(placement, Placement::Unplaced { attempts: 75 });
        assert_eq!(config.attempt_budget(), 75);
    }

    // Tests that equal seeds give equal layouts
    #[test]
    fn test_seeded_layout_reproducible() {
        let canvas = Canvas::new(300, 300).expect("valid canvas");

        let first = place_many(&mut RandomWalkLayout::seeded(short_walk(), 99), canvas, 12);
        let second = place_many(
            &mut RandomWalkLayout::with_rng(short_walk(), StdRng::seed_from_u64(99)),
            canvas,
            12,
        );
        assert_eq!(first, second);
    }

    // Tests the free-space predicate on touching and overlapping rectangles
    #[test]
    fn test_is_free() {
        let bounds = Rect::new(0, 0, 100, 100);
        let placed = [Rect::new(40, 40, 20, 20)];

        assert!(is_free(&Rect::new(60, 40, 10, 10), &bounds, &placed));
        assert!(!is_free(&Rect::new(55, 55, 10, 10), &bounds, &placed));
        assert!(!is_free(&Rect::new(95, 0, 10, 10), &bounds, &placed));
        assert!(!is_free(&Rect::new(-1, 0, 10, 10), &bounds, &placed));
        assert!(is_free(&Rect::new(0, 0, 10, 10), &bounds, &[]));
    }

    // Tests parameter validation and the default budget
    #[test]
    fn test_config_validation() {
        let defaults = LayoutConfig::default();
        assert!(defaults.validate().is_ok());
        assert_eq!(defaults.attempt_budget(), 4_000_000);

        let still = LayoutConfig {
            max_jitter: 0,
            ..defaults
        };
        assert!(matches!(
            still.validate(),
            Err(CloudError::InvalidParameter { .. })
        ));

        let empty = LayoutConfig {
            walk_length: 0,
            ..defaults
        };
        assert!(empty.validate().is_err());
        assert_eq!(
            RandomWalkLayout::seeded(defaults, 0).config(),
            &defaults
        );
    }
}
