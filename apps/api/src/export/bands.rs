//! Band slicing for content that was never paginated.
//!
//! The tall canvas is cut into bands no taller than one page. A band ends just
//! before the first mark that would cross its bottom edge, and that mark opens
//! the next band, so no line is split or pushed into the page margin. The first
//! band always exists.

/// Overshoot below this is treated as nothing.
const BAND_EPSILON_PT: f32 = 0.01;

/// Vertical offsets (from the top of the content) of each band, given the
/// `(top, bottom)` extent of every mark on the canvas.
///
/// A mark taller than a whole band starts its band and overflows it.
pub fn band_offsets(extents: &[(f32, f32)], band_height: f32) -> Vec<f32> {
    let mut offsets = vec![0.0];
    if !(band_height > 0.0) {
        return offsets;
    }
    let mut sorted: Vec<(f32, f32)> = extents
        .iter()
        .copied()
        .filter(|(top, bottom)| top.is_finite() && bottom.is_finite())
        .collect();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut start = 0.0_f32;
    for (top, bottom) in sorted {
        if bottom > start + band_height + BAND_EPSILON_PT && top > start + BAND_EPSILON_PT {
            start = top;
            offsets.push(start);
        }
    }
    offsets
}

/// Index of the band a mark starting at `top` belongs to.
pub fn band_index(offsets: &[f32], top: f32) -> usize {
    offsets
        .iter()
        .rposition(|&offset| top >= offset)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(count: usize, height: f32) -> Vec<(f32, f32)> {
        (0..count)
            .map(|i| (i as f32 * height, (i + 1) as f32 * height))
            .collect()
    }

    #[test]
    fn test_short_content_is_one_band() {
        assert_eq!(band_offsets(&lines(2, 10.0), 800.0), vec![0.0]);
        assert_eq!(band_offsets(&[], 800.0), vec![0.0]);
    }

    #[test]
    fn test_exact_fit_adds_no_blank_band() {
        assert_eq!(band_offsets(&lines(4, 10.0), 20.0), vec![0.0, 20.0]);
    }

    #[test]
    fn test_line_crossing_the_edge_opens_the_next_band() {
        // Band height 25: the third line (20..30) would be cut at 25.
        assert_eq!(band_offsets(&lines(4, 10.0), 25.0), vec![0.0, 20.0]);
        assert_eq!(band_offsets(&lines(8, 10.0), 25.0), vec![0.0, 20.0, 40.0, 60.0]);
    }

    #[test]
    fn test_mark_taller_than_a_band_is_not_split_forever() {
        let extents = [(0.0, 50.0), (50.0, 60.0)];
        assert_eq!(band_offsets(&extents, 20.0), vec![0.0, 50.0]);
    }

    #[test]
    fn test_invalid_band_height_yields_one_band() {
        assert_eq!(band_offsets(&lines(200, 10.0), 0.0), vec![0.0]);
    }

    #[test]
    fn test_band_index() {
        let offsets = [0.0, 20.0, 40.0];
        assert_eq!(band_index(&offsets, 0.0), 0);
        assert_eq!(band_index(&offsets, 19.9), 0);
        assert_eq!(band_index(&offsets, 20.0), 1);
        assert_eq!(band_index(&offsets, 75.0), 2);
    }
}
