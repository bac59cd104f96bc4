use serde::{Deserialize, Serialize};

use crate::core::dimension::Dimension;
use crate::error::{PlotError, PlotResult};

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects an index-aligned polyline into adjacent pixel-space segments.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output.
pub fn project_polyline(
    x_values: &[f64],
    y_values: &[f64],
    x_dimension: &dyn Dimension,
    y_dimension: &dyn Dimension,
) -> PlotResult<Vec<LineSegment>> {
    if y_values.len() != x_values.len() {
        return Err(PlotError::InvalidData(format!(
            "polyline arrays must be index-aligned: x={}, y={}",
            x_values.len(),
            y_values.len()
        )));
    }
    if x_values.len() < 2 {
        return Ok(Vec::new());
    }

    let mut mapped = Vec::with_capacity(x_values.len());
    for (x, y) in x_values.iter().zip(y_values) {
        mapped.push((x_dimension.to_pixel(*x), y_dimension.to_pixel(*y)));
    }

    let mut segments = Vec::with_capacity(mapped.len() - 1);
    for pair in mapped.windows(2) {
        segments.push(LineSegment {
            x1: pair[0].0,
            y1: pair[0].1,
            x2: pair[1].0,
            y2: pair[1].1,
        });
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::project_polyline;
    use crate::core::dimension::{Dimension, LinearDimension};

    fn dimensions() -> (LinearDimension, LinearDimension) {
        let mut x = LinearDimension::new(0.0, 10.0).expect("x dimension");
        x.set_range(0.0, 100.0).expect("x range");
        let mut y = LinearDimension::new(0.0, 1.0).expect("y dimension");
        y.set_range(50.0, 0.0).expect("y range");
        (x, y)
    }

    #[test]
    fn polyline_produces_adjacent_segments() {
        let (x, y) = dimensions();
        let segments =
            project_polyline(&[0.0, 5.0, 10.0], &[0.0, 1.0, 0.0], &x, &y).expect("segments");
        assert_eq!(segments.len(), 2);
        assert!((segments[0].x2 - 50.0).abs() <= 1e-9);
        assert!((segments[0].y2 - 0.0).abs() <= 1e-9);
        assert!((segments[1].x2 - 100.0).abs() <= 1e-9);
        assert!((segments[1].y2 - 50.0).abs() <= 1e-9);
    }

    #[test]
    fn single_point_yields_no_segments() {
        let (x, y) = dimensions();
        let segments = project_polyline(&[1.0], &[1.0], &x, &y).expect("segments");
        assert!(segments.is_empty());
    }
}
