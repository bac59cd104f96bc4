use tracing::{debug, warn};

use crate::api::axis_layout::build_axis_layer;
use crate::api::config::PlotConfig;
use crate::api::legend::{LegendEntry, LegendGlyph, build_legend_layer};
use crate::api::series_renderer::{SeriesPass, SeriesRenderer, ShapeContext};
use crate::core::{
    Dimension, EnsembleSeries, Viewport, build_error_envelope, project_envelope_polygon,
    project_error_bar, project_polyline, sample_marker_indices,
};
use crate::error::{PlotError, PlotResult};
use crate::render::{
    CirclePrimitive, LayeredRenderFrame, LinePrimitive, PlotLayerKind, PolygonPrimitive, Renderer,
    STYLE_OBSERVATION, STYLE_OBSERVATION_AREA, STYLE_OBSERVATION_ERROR_BAR, STYLE_REFCASE,
    StyleTable,
};

/// Ensemble/time-series plot container and render pipeline.
///
/// Owns the drawing surfaces (as a layered frame), both axis dimensions, the
/// style table, the legend list, the stored data, and the injected series
/// renderer. One instance per plot; nothing is shared.
pub struct EnsemblePlot<R: Renderer> {
    renderer: R,
    config: PlotConfig,
    width: f64,
    height: f64,
    x_dimension: Box<dyn Dimension>,
    y_dimension: Box<dyn Dimension>,
    styles: StyleTable,
    title: String,
    custom_x_min: Option<f64>,
    custom_x_max: Option<f64>,
    custom_y_min: Option<f64>,
    custom_y_max: Option<f64>,
    vertical_error_bar: bool,
    series_renderer: Option<Box<dyn SeriesRenderer>>,
    stored_data: Option<EnsembleSeries>,
    legend_entries: Vec<LegendEntry>,
    last_frame: Option<LayeredRenderFrame>,
}

impl<R: Renderer> EnsemblePlot<R> {
    pub fn new(
        renderer: R,
        config: PlotConfig,
        x_dimension: Box<dyn Dimension>,
        y_dimension: Box<dyn Dimension>,
    ) -> PlotResult<Self> {
        config.validate()?;

        let mut plot = Self {
            renderer,
            config,
            width: 0.0,
            height: 0.0,
            x_dimension,
            y_dimension,
            styles: StyleTable::default(),
            title: "No data".to_owned(),
            custom_x_min: None,
            custom_x_max: None,
            custom_y_min: None,
            custom_y_max: None,
            vertical_error_bar: config.vertical_error_bar,
            series_renderer: None,
            stored_data: None,
            legend_entries: Vec::new(),
            last_frame: None,
        };

        let width = f64::from(config.width) - config.margins.horizontal();
        let height = f64::from(config.height) - config.margins.vertical();
        plot.apply_pixel_size(width, height)?;
        Ok(plot)
    }

    /// Drawing-area viewport in pixels (outer size minus margins).
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as u32, self.height as u32)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn x_domain(&self) -> (f64, f64) {
        self.x_dimension.domain()
    }

    #[must_use]
    pub fn y_domain(&self) -> (f64, f64) {
        self.y_dimension.domain()
    }

    #[must_use]
    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    #[must_use]
    pub fn styles_mut(&mut self) -> &mut StyleTable {
        &mut self.styles
    }

    /// The layered frame built by the most recent render pass.
    #[must_use]
    pub fn last_frame(&self) -> Option<&LayeredRenderFrame> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Fresh projection helper bound to the current dimension state.
    #[must_use]
    pub fn shape_context(&self) -> ShapeContext<'_> {
        ShapeContext::new(self.x_dimension.as_ref(), self.y_dimension.as_ref())
    }

    /// Installs the strategy that draws the primary ensemble content.
    pub fn set_series_renderer(&mut self, series_renderer: impl SeriesRenderer + 'static) {
        self.series_renderer = Some(Box::new(series_renderer));
    }

    pub fn set_vertical_error_bar(&mut self, vertical: bool) {
        self.vertical_error_bar = vertical;
    }

    pub fn add_legend(
        &mut self,
        style_key: impl Into<String>,
        label: impl Into<String>,
        glyph: LegendGlyph,
    ) {
        self.legend_entries
            .push(LegendEntry::new(style_key, label, glyph));
    }

    pub fn reset_legends(&mut self) {
        self.legend_entries.clear();
    }

    #[must_use]
    pub fn legend_entries(&self) -> &[LegendEntry] {
        &self.legend_entries
    }

    /// Recomputes the drawing area from new outer dimensions and re-renders
    /// stored data against the new geometry.
    pub fn resize(&mut self, width: f64, height: f64) -> PlotResult<()> {
        let inner_width =
            width - self.config.chrome_insets.horizontal - self.config.margins.horizontal();
        let inner_height =
            height - self.config.chrome_insets.vertical - self.config.margins.vertical();

        self.apply_pixel_size(inner_width, inner_height)?;
        self.reapply_stored_data()
    }

    /// Overrides data-derived axis bounds; `None` clears an override.
    ///
    /// A call that changes nothing is a no-op and triggers no re-render.
    pub fn set_scales(
        &mut self,
        x_min: Option<f64>,
        x_max: Option<f64>,
        y_min: Option<f64>,
        y_max: Option<f64>,
    ) -> PlotResult<()> {
        for bound in [x_min, x_max, y_min, y_max].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(PlotError::InvalidData(
                    "custom axis bounds must be finite".to_owned(),
                ));
            }
        }

        if self.custom_x_min == x_min
            && self.custom_x_max == x_max
            && self.custom_y_min == y_min
            && self.custom_y_max == y_max
        {
            return Ok(());
        }

        self.custom_x_min = x_min;
        self.custom_x_max = x_max;
        self.custom_y_min = y_min;
        self.custom_y_max = y_max;
        self.reapply_stored_data()
    }

    /// Pushes data-derived x bounds into the dimension; custom bounds win
    /// per side independently.
    pub fn set_x_domain(&mut self, min_x: f64, max_x: f64) -> PlotResult<()> {
        let min = self.custom_x_min.unwrap_or(min_x);
        let max = self.custom_x_max.unwrap_or(max_x);
        self.x_dimension.set_domain(min, max)
    }

    /// Pushes data-derived y bounds into the dimension; custom bounds win
    /// per side independently.
    pub fn set_y_domain(&mut self, min_y: f64, max_y: f64) -> PlotResult<()> {
        let min = self.custom_y_min.unwrap_or(min_y);
        let max = self.custom_y_max.unwrap_or(max_y);
        self.y_dimension.set_domain(min, max)
    }

    /// Stores a series, updates the title and domains, and renders.
    pub fn set_data(&mut self, data: EnsembleSeries) -> PlotResult<()> {
        data.validate()?;

        self.title = data.name().to_owned();
        if let Some(bounds) = data.bounds() {
            self.set_y_domain(bounds.y_min, bounds.y_max)?;
            self.set_x_domain(bounds.x_min, bounds.x_max)?;
        }

        self.stored_data = Some(data);
        self.render()
    }

    /// Deterministic full-frame redraw from current data and geometry.
    ///
    /// Builds a fresh layered frame (axis layer, series strategy,
    /// observation/refcase overlays, legend row), flattens it in canonical
    /// stacking order and hands it to the backend.
    pub fn render(&mut self) -> PlotResult<()> {
        let viewport = self.viewport();
        if !viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let Some(strategy) = self.series_renderer.as_mut() else {
            return Err(PlotError::MissingSeriesRenderer);
        };

        self.legend_entries.clear();
        let mut frame = LayeredRenderFrame::new(viewport);
        build_axis_layer(
            &mut frame,
            self.x_dimension.as_ref(),
            self.y_dimension.as_ref(),
            &self.title,
            self.config.axis_font_px,
            self.config.title_font_px,
        );

        if let Some(data) = self.stored_data.as_ref() {
            let mut pass = SeriesPass::new(
                &mut frame,
                self.x_dimension.as_ref(),
                self.y_dimension.as_ref(),
                &self.styles,
                &mut self.legend_entries,
            );
            strategy.draw(&mut pass, data)?;

            let mut overlay = OverlayPass {
                frame: &mut frame,
                x_dimension: self.x_dimension.as_ref(),
                y_dimension: self.y_dimension.as_ref(),
                styles: &self.styles,
                legend_entries: &mut self.legend_entries,
                vertical_error_bar: self.vertical_error_bar,
                width_px: self.width,
                marker_spacing_px: self.config.marker_spacing_px,
            };
            overlay.render_observations(data)?;
            overlay.render_refcase(data)?;
        }

        build_legend_layer(&mut frame, &self.legend_entries, &self.styles);

        let flattened = frame.flatten();
        self.renderer.render(&flattened)?;
        debug!(
            lines = flattened.lines.len(),
            polygons = flattened.polygons.len(),
            circles = flattened.circles.len(),
            texts = flattened.texts.len(),
            "plot frame rendered"
        );
        self.last_frame = Some(frame);
        Ok(())
    }

    fn apply_pixel_size(&mut self, width: f64, height: f64) -> PlotResult<()> {
        if !width.is_finite() || !height.is_finite() || width < 1.0 || height < 1.0 {
            return Err(PlotError::InvalidViewport {
                width: width.max(0.0) as u32,
                height: height.max(0.0) as u32,
            });
        }

        self.width = width;
        self.height = height;
        self.x_dimension.set_range(0.0, width)?;
        self.y_dimension.set_range(height, 0.0)?;
        Ok(())
    }

    fn reapply_stored_data(&mut self) -> PlotResult<()> {
        match self.stored_data.take() {
            Some(data) => self.set_data(data),
            None => Ok(()),
        }
    }
}

/// Overlay stage of one render pass: observations and the refcase curve.
struct OverlayPass<'a> {
    frame: &'a mut LayeredRenderFrame,
    x_dimension: &'a dyn Dimension,
    y_dimension: &'a dyn Dimension,
    styles: &'a StyleTable,
    legend_entries: &'a mut Vec<LegendEntry>,
    vertical_error_bar: bool,
    width_px: f64,
    marker_spacing_px: f64,
}

impl OverlayPass<'_> {
    fn render_observations(&mut self, data: &EnsembleSeries) -> PlotResult<()> {
        let Some(observation) = data.observation_data() else {
            return Ok(());
        };
        let samples = observation.samples();
        if samples.is_empty() {
            warn!(series = data.name(), "observation series is empty");
            return Ok(());
        }

        if observation.is_continuous() {
            let area_style = self.styles.get(STYLE_OBSERVATION_AREA);
            let envelope = build_error_envelope(samples)?;
            let vertices =
                project_envelope_polygon(&envelope, self.x_dimension, self.y_dimension);
            if vertices.len() >= 3 {
                self.frame.push_polygon(
                    PlotLayerKind::Overlay,
                    PolygonPrimitive::new(vertices, area_style.fill),
                );
            }

            let line_style = self.styles.get(STYLE_OBSERVATION);
            self.push_polyline(&samples.x, &samples.y, STYLE_OBSERVATION)?;

            for index in
                sample_marker_indices(samples.len(), self.width_px, self.marker_spacing_px)
            {
                self.frame.push_circle(
                    PlotLayerKind::Overlay,
                    CirclePrimitive::new(
                        self.x_dimension.to_pixel(samples.x[index]),
                        self.y_dimension.to_pixel(samples.y[index]),
                        line_style.marker_radius,
                        line_style.stroke_width,
                        line_style.stroke,
                        true,
                    ),
                );
            }

            self.legend_entries.push(LegendEntry::new(
                STYLE_OBSERVATION,
                "Observation",
                LegendGlyph::CircledLine,
            ));
            self.legend_entries.push(LegendEntry::new(
                STYLE_OBSERVATION_AREA,
                "Observation error",
                LegendGlyph::FilledCircle,
            ));
        } else {
            let style = self.styles.get(STYLE_OBSERVATION_ERROR_BAR);
            for index in 0..samples.len() {
                let segments = project_error_bar(
                    samples.x[index],
                    samples.y[index],
                    samples.std[index],
                    self.vertical_error_bar,
                    self.x_dimension,
                    self.y_dimension,
                );
                for segment in segments {
                    self.frame.push_line(
                        PlotLayerKind::Overlay,
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
            }

            self.legend_entries.push(LegendEntry::new(
                STYLE_OBSERVATION_ERROR_BAR,
                "Observation error bar",
                LegendGlyph::ErrorBar,
            ));
        }

        Ok(())
    }

    fn render_refcase(&mut self, data: &EnsembleSeries) -> PlotResult<()> {
        let Some(refcase) = data.refcase_data() else {
            return Ok(());
        };

        self.push_polyline(&refcase.x, &refcase.y, STYLE_REFCASE)?;
        self.legend_entries.push(LegendEntry::new(
            STYLE_REFCASE,
            "Refcase",
            LegendGlyph::SimpleLine,
        ));
        Ok(())
    }

    fn push_polyline(
        &mut self,
        x_values: &[f64],
        y_values: &[f64],
        style_key: &str,
    ) -> PlotResult<()> {
        let style = self.styles.get(style_key);
        let segments = project_polyline(x_values, y_values, self.x_dimension, self.y_dimension)?;
        for segment in segments {
            self.frame.push_line(
                PlotLayerKind::Overlay,
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
}
