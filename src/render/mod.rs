mod frame;
mod layer_stack;
mod layered_frame;
mod null_renderer;
mod primitives;
mod style;

pub use frame::RenderFrame;
pub use layer_stack::{PlotLayerKind, canonical_layer_stack};
pub use layered_frame::{LayerPrimitives, LayeredRenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PolygonPrimitive, PolygonVertex, TextHAlign,
    TextPrimitive,
};
pub use style::{
    PlotStyle, STYLE_DEFAULT, STYLE_OBSERVATION, STYLE_OBSERVATION_AREA,
    STYLE_OBSERVATION_ERROR_BAR, STYLE_REFCASE, StyleTable,
};

use crate::error::PlotResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from plot domain logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
