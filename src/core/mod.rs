pub mod dimension;
pub mod envelope_geometry;
pub mod error_bar_geometry;
pub mod line_geometry;
pub mod marker_geometry;
pub mod series;
pub mod time_dimension;
pub mod types;

pub use dimension::{Dimension, LinearDimension};
pub use envelope_geometry::{EnvelopeGeometry, build_error_envelope, project_envelope_polygon};
pub use error_bar_geometry::{ErrorBarSegments, project_error_bar};
pub use line_geometry::{LineSegment, project_polyline};
pub use marker_geometry::sample_marker_indices;
pub use series::{
    EnsembleSeries, ObservationSeries, RefcaseSeries, SampledSeries, SeriesBounds,
};
pub use time_dimension::TimeDimension;
pub use types::{Margins, SamplePoint, Viewport};
