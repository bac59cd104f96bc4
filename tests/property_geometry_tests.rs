use ensplot::core::{
    Dimension, LinearDimension, SampledSeries, build_error_envelope, project_polyline,
    sample_marker_indices,
};
use proptest::prelude::*;

fn aligned_samples(len: usize) -> impl Strategy<Value = SampledSeries> {
    (
        prop::collection::vec(-1_000.0f64..1_000.0, len),
        prop::collection::vec(-1_000.0f64..1_000.0, len),
        prop::collection::vec(0.0f64..100.0, len),
    )
        .prop_map(|(x, y, std)| SampledSeries::new(x, y, std))
}

proptest! {
    #[test]
    fn envelope_has_two_vertices_per_sample(samples in (1usize..50).prop_flat_map(aligned_samples)) {
        let len = samples.len();
        let envelope = build_error_envelope(&samples).expect("envelope");
        prop_assert_eq!(envelope.len(), len * 2);

        // Upper edge first, forward; lower edge after, backward.
        for index in 0..len {
            prop_assert_eq!(envelope.x[index], samples.x[index]);
            prop_assert!((envelope.y[index] - (samples.y[index] + samples.std[index])).abs() <= 1e-9);
            let mirrored = envelope.len() - 1 - index;
            prop_assert_eq!(envelope.x[mirrored], samples.x[index]);
            prop_assert!((envelope.y[mirrored] - (samples.y[index] - samples.std[index])).abs() <= 1e-9);
        }
    }

    #[test]
    fn polyline_produces_one_segment_per_adjacent_pair(
        values in prop::collection::vec((-1_000.0f64..1_000.0, -1_000.0f64..1_000.0), 2..64)
    ) {
        let x_values: Vec<f64> = values.iter().map(|pair| pair.0).collect();
        let y_values: Vec<f64> = values.iter().map(|pair| pair.1).collect();

        let mut x = LinearDimension::new(-1_000.0, 1_000.0).expect("x dimension");
        x.set_range(0.0, 914.0).expect("x range");
        let mut y = LinearDimension::new(-1_000.0, 1_000.0).expect("y dimension");
        y.set_range(462.0, 0.0).expect("y range");

        let segments = project_polyline(&x_values, &y_values, &x, &y).expect("projection");
        prop_assert_eq!(segments.len(), x_values.len() - 1);

        // Consecutive segments share their joint vertex.
        for window in segments.windows(2) {
            prop_assert_eq!(window[0].x2, window[1].x1);
            prop_assert_eq!(window[0].y2, window[1].y1);
        }
    }

    #[test]
    fn marker_indices_stay_in_bounds_and_mark_the_end(
        len in 1usize..500,
        width_px in 1.0f64..4_000.0,
        spacing_px in 1.0f64..100.0
    ) {
        let indices = sample_marker_indices(len, width_px, spacing_px);
        prop_assert!(!indices.is_empty());
        prop_assert!(indices.iter().all(|index| *index < len));
        prop_assert_eq!(*indices.last().expect("not empty"), len - 1);
    }

    #[test]
    fn pixel_mapping_is_monotone_over_the_domain(
        domain_start in -1_000.0f64..1_000.0,
        span in 0.001f64..1_000.0,
        lower_factor in 0.0f64..1.0,
        gap_factor in 0.001f64..1.0
    ) {
        let mut dimension = LinearDimension::new(domain_start, domain_start + span).expect("dimension");
        dimension.set_range(0.0, 914.0).expect("range");

        let lower = domain_start + lower_factor * span * 0.5;
        let upper = lower + gap_factor * span * 0.5;
        prop_assert!(dimension.to_pixel(lower) < dimension.to_pixel(upper));
    }
}
