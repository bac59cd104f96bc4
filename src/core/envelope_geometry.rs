use serde::{Deserialize, Serialize};

use crate::core::dimension::Dimension;
use crate::core::series::SampledSeries;
use crate::error::PlotResult;
use crate::render::PolygonVertex;

/// Closed observation error envelope in domain coordinates.
///
/// For `N` input samples the envelope holds `2 * N` vertices: the upper edge
/// (`y + std`) walked forward, then the lower edge (`y - std`) walked
/// backward, so consumers can fill it as one closed polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeGeometry {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl EnvelopeGeometry {
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Builds the error envelope for continuous observation samples.
pub fn build_error_envelope(samples: &SampledSeries) -> PlotResult<EnvelopeGeometry> {
    samples.validate()?;

    let count = samples.len();
    let mut x = Vec::with_capacity(count * 2);
    let mut y = Vec::with_capacity(count * 2);

    for index in 0..count {
        x.push(samples.x[index]);
        y.push(samples.y[index] + samples.std[index]);
    }
    for index in (0..count).rev() {
        x.push(samples.x[index]);
        y.push(samples.y[index] - samples.std[index]);
    }

    Ok(EnvelopeGeometry { x, y })
}

/// Projects a domain-space envelope into a pixel-space polygon.
pub fn project_envelope_polygon(
    envelope: &EnvelopeGeometry,
    x_dimension: &dyn Dimension,
    y_dimension: &dyn Dimension,
) -> Vec<PolygonVertex> {
    envelope
        .x
        .iter()
        .zip(&envelope.y)
        .map(|(x, y)| PolygonVertex {
            x: x_dimension.to_pixel(*x),
            y: y_dimension.to_pixel(*y),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::build_error_envelope;
    use crate::core::series::SampledSeries;

    #[test]
    fn envelope_walks_upper_forward_then_lower_backward() {
        let samples = SampledSeries::new(
            vec![0.0, 1.0, 2.0],
            vec![1.0, 2.0, 1.0],
            vec![0.1, 0.2, 0.1],
        );
        let envelope = build_error_envelope(&samples).expect("envelope");

        assert_eq!(envelope.x, vec![0.0, 1.0, 2.0, 2.0, 1.0, 0.0]);
        let expected_y = [1.1, 2.2, 1.1, 0.9, 1.8, 0.9];
        assert_eq!(envelope.y.len(), expected_y.len());
        for (actual, expected) in envelope.y.iter().zip(expected_y) {
            assert!((actual - expected).abs() <= 1e-12);
        }
    }

    #[test]
    fn empty_samples_yield_empty_envelope() {
        let samples = SampledSeries::new(Vec::new(), Vec::new(), Vec::new());
        let envelope = build_error_envelope(&samples).expect("envelope");
        assert!(envelope.is_empty());
    }
}
