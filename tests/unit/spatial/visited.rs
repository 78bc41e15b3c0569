//! Tests for `VisitMask` marking, bounds and clearing

#[cfg(test)]
mod tests {
    use fillgrid::spatial::point::Point;
    use fillgrid::spatial::visited::VisitMask;

    // Verifies a new mask has nothing marked
    // Verified by initializing the mask with all bits set
    #[test]
    fn test_new_mask_is_clear() {
        let mask = VisitMask::new(4, 3);
        assert!(mask.is_clear());
        assert_eq!(mask.count(), 0);
        assert_eq!((mask.width(), mask.height()), (4, 3));
    }

    // Tests mark reports only the first visit
    // Verified by always returning true from mark
    #[test]
    fn test_mark_reports_first_visit() {
        let mut mask = VisitMask::new(4, 3);
        assert!(mask.mark(Point::new(2, 1)));
        assert!(!mask.mark(Point::new(2, 1)));
        assert!(mask.is_marked(Point::new(2, 1)));
        assert!(!mask.is_marked(Point::new(1, 2)));
        assert_eq!(mask.count(), 1);
    }

    // Tests out-of-range points are never marked
    // Verified by removing the bounds check in index
    #[test]
    fn test_out_of_range_points_ignored() {
        let mut mask = VisitMask::new(2, 2);
        assert!(!mask.mark(Point::new(-1, 0)));
        assert!(!mask.mark(Point::new(2, 0)));
        assert!(!mask.mark(Point::new(0, 2)));
        assert!(!mask.is_marked(Point::new(2, 0)));
        assert!(mask.is_clear());
    }

    // Tests clear resets every mark
    // Verified by clearing only the first bit
    #[test]
    fn test_clear_resets_all_marks() {
        let mut mask = VisitMask::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                mask.mark(Point::new(x, y));
            }
        }
        assert_eq!(mask.count(), 9);
        mask.clear();
        assert!(mask.is_clear());
        assert_eq!(mask.to_string(), "VisitMask(3x3, 0 visited)");
    }
}
