use smallvec::SmallVec;

use crate::core::dimension::Dimension;
use crate::core::line_geometry::LineSegment;

/// Pixel half-length of the cap strokes at both ends of an error bar.
pub const ERROR_BAR_CAP_HALF_PX: f64 = 4.0;

pub type ErrorBarSegments = SmallVec<[LineSegment; 3]>;

/// Projects one `(x, y, std)` sample into error-bar strokes: the main bar
/// plus one cap at each end.
///
/// `vertical` selects the uncertainty axis: a vertical bar spans
/// `y ± std`, a horizontal bar spans `x ± std`.
pub fn project_error_bar(
    x: f64,
    y: f64,
    std: f64,
    vertical: bool,
    x_dimension: &dyn Dimension,
    y_dimension: &dyn Dimension,
) -> ErrorBarSegments {
    let mut segments = ErrorBarSegments::new();

    if vertical {
        let x_px = x_dimension.to_pixel(x);
        let low_px = y_dimension.to_pixel(y - std);
        let high_px = y_dimension.to_pixel(y + std);
        segments.push(LineSegment {
            x1: x_px,
            y1: low_px,
            x2: x_px,
            y2: high_px,
        });
        for end_px in [low_px, high_px] {
            segments.push(LineSegment {
                x1: x_px - ERROR_BAR_CAP_HALF_PX,
                y1: end_px,
                x2: x_px + ERROR_BAR_CAP_HALF_PX,
                y2: end_px,
            });
        }
    } else {
        let y_px = y_dimension.to_pixel(y);
        let low_px = x_dimension.to_pixel(x - std);
        let high_px = x_dimension.to_pixel(x + std);
        segments.push(LineSegment {
            x1: low_px,
            y1: y_px,
            x2: high_px,
            y2: y_px,
        });
        for end_px in [low_px, high_px] {
            segments.push(LineSegment {
                x1: end_px,
                y1: y_px - ERROR_BAR_CAP_HALF_PX,
                x2: end_px,
                y2: y_px + ERROR_BAR_CAP_HALF_PX,
            });
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::project_error_bar;
    use crate::core::dimension::{Dimension, LinearDimension};

    fn dimensions() -> (LinearDimension, LinearDimension) {
        let mut x = LinearDimension::new(0.0, 10.0).expect("x dimension");
        x.set_range(0.0, 100.0).expect("x range");
        let mut y = LinearDimension::new(0.0, 10.0).expect("y dimension");
        y.set_range(100.0, 0.0).expect("y range");
        (x, y)
    }

    #[test]
    fn vertical_bar_spans_std_in_pixel_space() {
        let (x, y) = dimensions();
        let segments = project_error_bar(5.0, 5.0, 1.0, true, &x, &y);
        assert_eq!(segments.len(), 3);
        let bar = segments[0];
        assert!((bar.x1 - 50.0).abs() <= 1e-9);
        assert!((bar.y1 - 60.0).abs() <= 1e-9);
        assert!((bar.y2 - 40.0).abs() <= 1e-9);
    }

    #[test]
    fn horizontal_bar_spans_std_on_x() {
        let (x, y) = dimensions();
        let segments = project_error_bar(5.0, 5.0, 1.0, false, &x, &y);
        let bar = segments[0];
        assert!((bar.x1 - 40.0).abs() <= 1e-9);
        assert!((bar.x2 - 60.0).abs() <= 1e-9);
        assert!((bar.y1 - bar.y2).abs() <= 1e-9);
    }
}
