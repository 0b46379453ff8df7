//! Tests for runtime defaults and rendering constants

#[cfg(test)]
mod tests {
    use queentrace::io::configuration::{
        CELL_PIXELS, DEFAULT_FRAME_DELAY_MS, EMPTY_MARK, FINAL_FRAME_HOLD_FACTOR,
        MAX_ANIMATED_BOARD, QUEEN_MARK, VIEWER_MIN_FRAME_DELAY_MS,
    };

    // Tests the default cadence needs no viewer-side frame skipping
    // Verified by lowering the default below the viewer minimum
    #[test]
    fn test_default_delay_meets_viewer_minimum() {
        assert!(DEFAULT_FRAME_DELAY_MS >= VIEWER_MIN_FRAME_DELAY_MS);
    }

    // Tests rendering constants stay usable for pixel arithmetic
    // Verified by shrinking the cell below the diamond radius
    #[test]
    fn test_render_constants_are_consistent() {
        assert!(CELL_PIXELS >= 8);
        assert!(CELL_PIXELS.is_multiple_of(2));
        assert!(FINAL_FRAME_HOLD_FACTOR >= 1);
        assert!(MAX_ANIMATED_BOARD >= 4);
    }

    // Tests report markers render one character per cell
    // Verified by widening a marker to two characters
    #[test]
    fn test_report_markers_are_single_cells() {
        assert_eq!(QUEEN_MARK.len(), 1);
        assert_eq!(EMPTY_MARK.len(), 1);
        assert_ne!(QUEEN_MARK, EMPTY_MARK);
    }
}
