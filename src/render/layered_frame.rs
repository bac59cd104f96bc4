use crate::core::Viewport;
use crate::render::{
    CirclePrimitive, LinePrimitive, PlotLayerKind, PolygonPrimitive, RenderFrame, TextPrimitive,
    layer_stack::canonical_layer_stack,
};

/// Primitive buffers for one compositing layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: PlotLayerKind,
    pub lines: Vec<LinePrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    fn empty(kind: PlotLayerKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            polygons: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.lines.len() + self.polygons.len() + self.circles.len() + self.texts.len()
    }
}

/// One plot draw pass split across the canonical layer stack.
///
/// Building a fresh instance per pass is the moral equivalent of clearing
/// every canvas before redrawing.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredRenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl LayeredRenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let layers = canonical_layer_stack()
            .into_iter()
            .map(LayerPrimitives::empty)
            .collect();
        Self { viewport, layers }
    }

    pub fn push_line(&mut self, kind: PlotLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn push_polygon(&mut self, kind: PlotLayerKind, polygon: PolygonPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.polygons.push(polygon);
        }
    }

    pub fn push_circle(&mut self, kind: PlotLayerKind, circle: CirclePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.circles.push(circle);
        }
    }

    pub fn push_text(&mut self, kind: PlotLayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    #[must_use]
    pub fn layer(&self, kind: PlotLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    /// Merges all layers into one scene in canonical stacking order.
    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            frame.lines.extend(layer.lines.iter().copied());
            frame.polygons.extend(layer.polygons.iter().cloned());
            frame.circles.extend(layer.circles.iter().copied());
            frame.texts.extend(layer.texts.iter().cloned());
        }
        frame
    }

    fn layer_mut(&mut self, kind: PlotLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::LayeredRenderFrame;
    use crate::core::Viewport;
    use crate::render::{Color, LinePrimitive, PlotLayerKind, TextHAlign, TextPrimitive};

    #[test]
    fn flatten_preserves_layer_stacking_order() {
        let mut layered = LayeredRenderFrame::new(Viewport::new(100, 50));

        layered.push_line(
            PlotLayerKind::Overlay,
            LinePrimitive::new(0.0, 2.0, 5.0, 3.0, 1.0, Color::rgb(0.8, 0.2, 0.2)),
        );
        layered.push_line(
            PlotLayerKind::Series,
            LinePrimitive::new(0.0, 1.0, 5.0, 1.0, 1.0, Color::rgb(0.2, 0.2, 0.2)),
        );
        layered.push_text(
            PlotLayerKind::Axis,
            TextPrimitive::new(
                "x",
                2.0,
                4.0,
                10.0,
                Color::rgb(1.0, 1.0, 1.0),
                TextHAlign::Right,
            ),
        );

        let flattened = layered.flatten();
        assert_eq!(flattened.lines.len(), 2);
        assert_eq!(flattened.texts.len(), 1);
        // Series comes before Overlay in the canonical stack.
        assert_eq!(flattened.lines[0].y1, 1.0);
        assert_eq!(flattened.lines[1].y1, 2.0);
    }

    #[test]
    fn fresh_frame_has_empty_canonical_layers() {
        let layered = LayeredRenderFrame::new(Viewport::new(10, 10));
        assert_eq!(layered.layers.len(), 5);
        assert!(layered.layers.iter().all(|layer| layer.primitive_count() == 0));
    }
}
