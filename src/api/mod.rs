//! Public plot surface: configuration, the plot container, the series
//! renderer strategy, and legend types.

mod axis_layout;
mod config;
mod legend;
mod plot;
mod series_renderer;

pub use config::{ChromeInsets, PlotConfig};
pub use legend::{LegendEntry, LegendGlyph};
pub use plot::EnsemblePlot;
pub use series_renderer::{SeriesPass, SeriesRenderer, ShapeContext};
