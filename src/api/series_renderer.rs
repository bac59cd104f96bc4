use crate::api::legend::{LegendEntry, LegendGlyph};
use crate::core::line_geometry::{LineSegment, project_polyline};
use crate::core::{Dimension, EnsembleSeries, Viewport};
use crate::error::PlotResult;
use crate::render::{
    CirclePrimitive, LayeredRenderFrame, LinePrimitive, PlotLayerKind, PlotStyle,
    PolygonPrimitive, PolygonVertex, StyleTable,
};

/// Strategy drawing the primary ensemble content of a plot.
///
/// Installed once per plot instance; invoked on every render pass with a
/// `SeriesPass` scoped to that pass. Implementations draw through the pass
/// and may register legend entries for what they drew.
pub trait SeriesRenderer {
    fn draw(&mut self, pass: &mut SeriesPass<'_>, data: &EnsembleSeries) -> PlotResult<()>;
}

impl<F> SeriesRenderer for F
where
    F: FnMut(&mut SeriesPass<'_>, &EnsembleSeries) -> PlotResult<()>,
{
    fn draw(&mut self, pass: &mut SeriesPass<'_>, data: &EnsembleSeries) -> PlotResult<()> {
        self(pass, data)
    }
}

/// Projection helper bound to the plot's current dimensions.
///
/// A fresh context is handed out per use so callers always see the current
/// domain/range state, never a stale snapshot.
#[derive(Clone, Copy)]
pub struct ShapeContext<'a> {
    x_dimension: &'a dyn Dimension,
    y_dimension: &'a dyn Dimension,
}

impl<'a> ShapeContext<'a> {
    pub(crate) fn new(x_dimension: &'a dyn Dimension, y_dimension: &'a dyn Dimension) -> Self {
        Self {
            x_dimension,
            y_dimension,
        }
    }

    #[must_use]
    pub fn x_to_pixel(&self, x: f64) -> f64 {
        self.x_dimension.to_pixel(x)
    }

    #[must_use]
    pub fn y_to_pixel(&self, y: f64) -> f64 {
        self.y_dimension.to_pixel(y)
    }

    pub fn polyline(&self, x_values: &[f64], y_values: &[f64]) -> PlotResult<Vec<LineSegment>> {
        project_polyline(x_values, y_values, self.x_dimension, self.y_dimension)
    }

    #[must_use]
    pub fn point(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x_to_pixel(x), self.y_to_pixel(y))
    }
}

/// Per-pass drawing surface handed to the installed `SeriesRenderer`.
///
/// Borrowing the frame for the duration of the pass makes a recursive
/// render call unrepresentable.
pub struct SeriesPass<'a> {
    frame: &'a mut LayeredRenderFrame,
    x_dimension: &'a dyn Dimension,
    y_dimension: &'a dyn Dimension,
    styles: &'a StyleTable,
    legend_entries: &'a mut Vec<LegendEntry>,
}

impl<'a> SeriesPass<'a> {
    pub(crate) fn new(
        frame: &'a mut LayeredRenderFrame,
        x_dimension: &'a dyn Dimension,
        y_dimension: &'a dyn Dimension,
        styles: &'a StyleTable,
        legend_entries: &'a mut Vec<LegendEntry>,
    ) -> Self {
        Self {
            frame,
            x_dimension,
            y_dimension,
            styles,
            legend_entries,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.frame.viewport
    }

    #[must_use]
    pub fn style(&self, key: &str) -> PlotStyle {
        self.styles.get(key)
    }

    #[must_use]
    pub fn shapes(&self) -> ShapeContext<'_> {
        ShapeContext::new(self.x_dimension, self.y_dimension)
    }

    /// Strokes a polyline through domain-space samples into the series layer.
    pub fn draw_polyline(
        &mut self,
        style_key: &str,
        x_values: &[f64],
        y_values: &[f64],
    ) -> PlotResult<()> {
        let style = self.styles.get(style_key);
        let segments = project_polyline(x_values, y_values, self.x_dimension, self.y_dimension)?;
        for segment in segments {
            self.frame.push_line(
                PlotLayerKind::Series,
                LinePrimitive::new(
                    segment.x1,
                    segment.y1,
                    segment.x2,
                    segment.y2,
                    style.stroke_width,
                    style.stroke,
                ),
            );
        }
        Ok(())
    }

    /// Fills a closed domain-space polygon into the series layer.
    pub fn draw_area(
        &mut self,
        style_key: &str,
        x_values: &[f64],
        y_values: &[f64],
    ) -> PlotResult<()> {
        let style = self.styles.get(style_key);
        let vertices: Vec<PolygonVertex> = x_values
            .iter()
            .zip(y_values)
            .map(|(x, y)| PolygonVertex {
                x: self.x_dimension.to_pixel(*x),
                y: self.y_dimension.to_pixel(*y),
            })
            .collect();
        self.frame.push_polygon(
            PlotLayerKind::Series,
            PolygonPrimitive::new(vertices, style.fill),
        );
        Ok(())
    }

    /// Draws one filled marker at a domain-space position.
    pub fn draw_marker(&mut self, style_key: &str, x: f64, y: f64) {
        let style = self.styles.get(style_key);
        self.frame.push_circle(
            PlotLayerKind::Series,
            CirclePrimitive::new(
                self.x_dimension.to_pixel(x),
                self.y_dimension.to_pixel(y),
                style.marker_radius,
                style.stroke_width,
                style.stroke,
                true,
            ),
        );
    }

    /// Registers one legend entry for content drawn by this pass.
    pub fn add_legend(
        &mut self,
        style_key: impl Into<String>,
        label: impl Into<String>,
        glyph: LegendGlyph,
    ) {
        self.legend_entries
            .push(LegendEntry::new(style_key, label, glyph));
    }
}
