//! Tests for the per-document pipeline: preparation, stepwise placement and rendering

#[cfg(test)]
mod tests {
    use crate::support::{BlockFace, words};
    use image::Rgba;
    use wordcloud::algorithm::executor::{CloudConfig, WordCloud, generate};
    use wordcloud::algorithm::random_walk::{LayoutConfig, RandomWalkLayout};
    use wordcloud::algorithm::strategy::{Canvas, LayoutStrategy, OverflowPolicy, Placement};
    use wordcloud::io::palette::Palette;
    use wordcloud::spatial::Rect;
    use wordcloud::{CloudError, Result};

    fn small_config() -> CloudConfig {
        CloudConfig {
            canvas_width: 100,
            canvas_height: 50,
            max_font_size: 20,
            layout: LayoutConfig {
                max_jitter: 8,
                walk_length: 5_000,
                max_restarts: 1,
            },
            ..CloudConfig::default()
        }
    }

    // Never finds room
    struct NoRoom;

    impl LayoutStrategy for NoRoom {
        fn place(&mut self, _size: (u32, u32), _placed: &[Rect], _canvas: Canvas) -> Result<Placement> {
            Ok(Placement::Unplaced { attempts: 5 })
        }
    }

    // Always answers with the top-left corner
    struct Corner;

    impl LayoutStrategy for Corner {
        fn place(&mut self, size: (u32, u32), _placed: &[Rect], _canvas: Canvas) -> Result<Placement> {
            Ok(Placement::Placed(Rect::new(0, 0, size.0, size.1)))
        }
    }

    // Tests configuration validation before any work is done
    #[test]
    fn test_config_validation() {
        assert!(CloudConfig::default().validate().is_ok());

        for config in [
            CloudConfig {
                canvas_width: 0,
                ..small_config()
            },
            CloudConfig {
                max_font_size: 0,
                ..small_config()
            },
            CloudConfig {
                max_words: 0,
                ..small_config()
            },
        ] {
            assert!(matches!(
                config.validate(),
                Err(CloudError::InvalidParameter { .. })
            ));
        }
    }

    // Tests that a document without countable words is reported, not drawn
    #[test]
    fn test_empty_vocabulary() {
        let empty = WordCloud::from_words(Vec::new(), small_config());
        assert!(matches!(empty, Err(CloudError::EmptyVocabulary { .. })));

        let only_stop_words = WordCloud::from_text("the and of to", small_config());
        assert!(only_stop_words.is_err_and(|e| e.is_recoverable()));
    }

    // Tests that the drawn count is clamped to the vocabulary
    // Verified by preparing glyphs for the requested count
    #[test]
    fn test_max_words_clamped() {
        let config = CloudConfig {
            max_words: 10,
            ..small_config()
        };
        let mut cloud =
            WordCloud::from_words(words(&[("SUN", 3), ("RAIN", 2), ("FOG", 1)]), config)
                .expect("cloud");
        cloud.prepare(&BlockFace).expect("prepared");

        assert_eq!(cloud.max_words(), 3);
        assert_eq!(cloud.glyphs().len(), 3);

        let sizes: Vec<u32> = cloud.glyphs().iter().map(|g| g.display_size()).collect();
        assert_eq!(sizes, vec![3, 2, 1]);
    }

    // Tests that only the top words get glyphs while the full ranking is kept
    #[test]
    fn test_cutoff_keeps_ranking() {
        let config = CloudConfig {
            max_words: 2,
            ..small_config()
        };
        let mut cloud = WordCloud::from_words(
            words(&[("SUN", 9), ("RAIN", 5), ("FOG", 2), ("HAIL", 1)]),
            config,
        )
        .expect("cloud");
        cloud.prepare(&BlockFace).expect("prepared");

        assert_eq!(cloud.ranked_words().len(), 4);
        let sizes: Vec<u32> = cloud.glyphs().iter().map(|g| g.display_size()).collect();
        assert_eq!(sizes, vec![20, 1]);
    }

    // Tests that placement requires preparation
    #[test]
    fn test_step_before_prepare() {
        let mut cloud =
            WordCloud::from_words(words(&[("SUN", 1)]), small_config()).expect("cloud");
        let outcome = cloud.execute_step(&mut NoRoom);
        assert!(matches!(outcome, Err(CloudError::Computation { .. })));
    }

    // Tests that skipped words are counted and the run still completes
    // Verified by aborting on the first unplaced word
    #[test]
    fn test_skip_policy() {
        let mut cloud = WordCloud::from_words(words(&[("SUN", 2), ("RAIN", 1)]), small_config())
            .expect("cloud");
        cloud.prepare(&BlockFace).expect("prepared");

        assert!(cloud.execute_step(&mut NoRoom).expect("step"));
        assert!(cloud.execute_step(&mut NoRoom).expect("step"));
        assert!(!cloud.execute_step(&mut NoRoom).expect("step"));

        assert!(cloud.is_complete());
        assert_eq!(cloud.unplaced_count(), 2);
        assert_eq!(cloud.placed_count(), 0);
    }

    // Tests that the abort policy names the stalled word
    #[test]
    fn test_abort_policy() {
        let config = CloudConfig {
            overflow: OverflowPolicy::Abort,
            ..small_config()
        };
        let mut cloud =
            WordCloud::from_words(words(&[("SUN", 2), ("RAIN", 1)]), config).expect("cloud");
        cloud.prepare(&BlockFace).expect("prepared");

        match cloud.layout(&mut NoRoom) {
            Err(CloudError::PlacementStalled { word, attempts }) => {
                assert_eq!(word, "SUN");
                assert_eq!(attempts, 5);
            }
            other => panic!("expected a stalled placement, got {other:?}"),
        }
    }

    // Tests that overlapping answers from a strategy are rejected
    // Verified by trusting the strategy's rectangle
    #[test]
    fn test_overlapping_strategy_rejected() {
        let mut cloud = WordCloud::from_words(words(&[("SUN", 2), ("RAIN", 1)]), small_config())
            .expect("cloud");
        cloud.prepare(&BlockFace).expect("prepared");

        assert!(cloud.execute_step(&mut Corner).expect("first step"));
        assert!(matches!(
            cloud.execute_step(&mut Corner),
            Err(CloudError::Computation { .. })
        ));
        assert_eq!(cloud.placed_count(), 1);
    }

    // Tests a single word: middle size, centered, drawn in the first color
    // Verified by offsetting the first glyph from the center
    #[test]
    fn test_single_word_render() {
        let red = Rgba([255, 0, 0, 255]);
        let config = CloudConfig {
            max_words: 1,
            palette: Palette::new(vec![red]).expect("palette"),
            ..small_config()
        };
        let mut cloud = WordCloud::from_words(words(&[("SUN", 4)]), config).expect("cloud");
        cloud.prepare(&BlockFace).expect("prepared");
        let mut strategy = RandomWalkLayout::seeded(cloud.config().layout, 3);
        cloud.layout(&mut strategy).expect("layout");

        let glyph = cloud.glyphs().first().expect("glyph");
        assert_eq!(glyph.display_size(), 10);
        assert_eq!(glyph.bounds(), Some(Rect::new(41, 20, 18, 10)));

        let image = cloud.render(&BlockFace).expect("render");
        assert_eq!(image.dimensions(), (100, 50));
        assert_eq!(*image.get_pixel(41, 20), red);
        assert_eq!(*image.get_pixel(58, 29), red);
        assert_eq!(*image.get_pixel(0, 0), cloud.config().background);
        assert_eq!(*image.get_pixel(59, 20), cloud.config().background);
    }

    // Tests that a full run is reproducible and collision free
    #[test]
    fn test_generate_reproducible() {
        let text = "storm storm storm rain rain wind wind cloud sun fog hail snow";
        let config = CloudConfig {
            canvas_width: 400,
            canvas_height: 300,
            max_font_size: 40,
            max_words: 8,
            ..small_config()
        };

        let (first, first_image) =
            generate(text, config.clone(), &BlockFace, 11).expect("first run");
        let (second, second_image) = generate(text, config, &BlockFace, 11).expect("second run");

        let bounds: Vec<Option<Rect>> = first.glyphs().iter().map(|g| g.bounds()).collect();
        let again: Vec<Option<Rect>> = second.glyphs().iter().map(|g| g.bounds()).collect();
        assert_eq!(bounds, again);
        assert!(first_image == second_image);

        let placed: Vec<Rect> = bounds.into_iter().flatten().collect();
        assert_eq!(placed.len() + first.unplaced_count(), first.glyphs().len());
        for (i, rect) in placed.iter().enumerate() {
            assert!(first.canvas().rect().contains(rect));
            for other in placed.iter().skip(i + 1) {
                assert!(!rect.intersects(other), "{rect:?} overlaps {other:?}");
            }
        }
    }
}
