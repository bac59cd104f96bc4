/// Selects sample indices for observation markers.
///
/// Marker density follows the drawing width: roughly one marker every
/// `spacing_px` pixels, walked with a fractional step over the sample index
/// space. Rounded indices are clamped to `len - 1`, and the last index is
/// appended explicitly so the curve end is always marked (it may therefore
/// appear twice, matching the historical drawing behavior).
pub fn sample_marker_indices(len: usize, width_px: f64, spacing_px: f64) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    if !width_px.is_finite() || !spacing_px.is_finite() || width_px <= 0.0 || spacing_px <= 0.0 {
        return vec![len - 1];
    }

    let marker_count = width_px / spacing_px;
    let step = len as f64 / marker_count;
    let mut indices = Vec::new();

    let mut cursor = 0.0;
    while cursor < len as f64 {
        let index = (cursor.round() as usize).min(len - 1);
        indices.push(index);
        if step <= 0.0 {
            break;
        }
        cursor += step;
    }

    indices.push(len - 1);
    indices
}

#[cfg(test)]
mod tests {
    use super::sample_marker_indices;

    #[test]
    fn indices_stay_in_bounds_and_end_is_marked() {
        let indices = sample_marker_indices(100, 914.0, 20.0);
        assert!(!indices.is_empty());
        assert!(indices.iter().all(|index| *index < 100));
        assert_eq!(*indices.last().expect("not empty"), 99);
    }

    #[test]
    fn narrow_plots_still_mark_first_and_last_samples() {
        let indices = sample_marker_indices(50, 10.0, 20.0);
        assert_eq!(indices.first().copied(), Some(0));
        assert_eq!(indices.last().copied(), Some(49));
    }

    #[test]
    fn empty_series_produces_no_markers() {
        assert!(sample_marker_indices(0, 914.0, 20.0).is_empty());
    }

    #[test]
    fn more_markers_than_samples_clamps_to_len() {
        let indices = sample_marker_indices(3, 914.0, 20.0);
        assert!(indices.iter().all(|index| *index < 3));
        assert_eq!(*indices.last().expect("not empty"), 2);
    }
}
