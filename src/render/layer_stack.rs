use serde::{Deserialize, Serialize};

/// Compositing layers of one plot, mirroring the main canvas / overlay
/// canvas / axis group / legend region split of canvas-based plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlotLayerKind {
    Background,
    Series,
    Overlay,
    Axis,
    Legend,
}

/// Axes sit above both drawing surfaces; the legend is composed last.
#[must_use]
pub fn canonical_layer_stack() -> Vec<PlotLayerKind> {
    vec![
        PlotLayerKind::Background,
        PlotLayerKind::Series,
        PlotLayerKind::Overlay,
        PlotLayerKind::Axis,
        PlotLayerKind::Legend,
    ]
}
