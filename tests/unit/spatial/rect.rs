//! Tests for rectangle containment, intersection and centering

#[cfg(test)]
mod tests {
    use wordcloud::spatial::Rect;

    // Tests that touching edges do not count as overlap
    // Verified by making the intersection comparisons inclusive
    #[test]
    fn test_adjacent_rectangles_do_not_intersect() {
        let left = Rect::new(0, 0, 10, 10);
        let right = Rect::new(10, 0, 10, 10);
        let below = Rect::new(0, 10, 10, 10);

        assert!(!left.intersects(&right));
        assert!(!right.intersects(&left));
        assert!(!left.intersects(&below));
    }

    // Tests partial overlap, nesting and symmetry
    // Verified by dropping the vertical overlap condition
    #[test]
    fn test_overlapping_rectangles_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(9, 9, 5, 5);
        let inner = Rect::new(2, 2, 2, 2);
        let beside = Rect::new(20, 0, 5, 5);
        let same_row_far = Rect::new(5, 30, 5, 5);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(a.intersects(&inner));
        assert!(inner.intersects(&a));
        assert!(!a.intersects(&beside));
        assert!(!a.intersects(&same_row_far));
    }

    // Tests that empty rectangles never collide
    // Verified by removing the zero-size guard
    #[test]
    fn test_empty_rectangles_never_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let empty = Rect::new(5, 5, 0, 3);

        assert!(!a.intersects(&empty));
        assert!(!empty.intersects(&a));
    }

    // Tests containment at the exact canvas edges
    // Verified by using a strict comparison on the right edge
    #[test]
    fn test_containment_edges() {
        let canvas = Rect::new(0, 0, 100, 50);

        assert!(canvas.contains(&Rect::new(0, 0, 100, 50)));
        assert!(canvas.contains(&Rect::new(90, 40, 10, 10)));
        assert!(!canvas.contains(&Rect::new(91, 40, 10, 10)));
        assert!(!canvas.contains(&Rect::new(-1, 0, 10, 10)));
        assert!(!canvas.contains(&Rect::new(0, 41, 10, 10)));
    }

    // Tests integer centering including odd sizes and oversize rectangles
    // Verified by centering with a single combined division
    #[test]
    fn test_centered() {
        assert_eq!(Rect::centered(10, 4, 100, 50), Rect::new(45, 23, 10, 4));
        assert_eq!(Rect::centered(11, 5, 101, 51), Rect::new(45, 23, 11, 5));
        assert_eq!(Rect::centered(200, 10, 100, 50).x, -50);
    }

    // Tests that translation keeps the size and saturates at the coordinate range
    // Verified by swapping dx and dy
    #[test]
    fn test_translate() {
        let rect = Rect::new(5, 7, 3, 4);

        assert_eq!(rect.translated(2, -3), Rect::new(7, 4, 3, 4));
        assert_eq!(Rect::new(i32::MAX, 0, 1, 1).translated(5, 0).x, i32::MAX);
        assert_eq!(rect.right(), 8);
        assert_eq!(rect.bottom(), 11);
    }
}
