use crate::core::Dimension;
use crate::core::dimension::select_ticks_with_min_spacing;
use crate::render::{
    Color, LayeredRenderFrame, LinePrimitive, PlotLayerKind, TextHAlign, TextPrimitive,
};

pub(crate) const X_TICK_TARGET_SPACING_PX: f64 = 72.0;
pub(crate) const X_TICK_MIN_SPACING_PX: f64 = 56.0;
pub(crate) const Y_TICK_TARGET_SPACING_PX: f64 = 26.0;
pub(crate) const Y_TICK_MIN_SPACING_PX: f64 = 22.0;

const TICK_MARK_PX: f64 = 6.0;
const AXIS_STROKE_PX: f64 = 1.0;
const MIN_TICKS: usize = 2;
const MAX_TICKS: usize = 24;

const AXIS_LINE_COLOR: Color = Color::rgb(0.45, 0.45, 0.48);
const AXIS_LABEL_COLOR: Color = Color::rgb(0.15, 0.15, 0.18);

pub(crate) fn tick_target_count(axis_span_px: f64, target_spacing_px: f64) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return MIN_TICKS;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return MIN_TICKS;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(MIN_TICKS, MAX_TICKS)
}

/// Emits both axes into the axis layer: baselines, tick marks, formatted
/// tick labels, and the plot title.
///
/// Labels live in the margin space around the drawing area (negative x for
/// the y axis, beyond `height` for the x axis), mirroring the margin layout
/// of the original canvas plots.
pub(crate) fn build_axis_layer(
    frame: &mut LayeredRenderFrame,
    x_dimension: &dyn Dimension,
    y_dimension: &dyn Dimension,
    title: &str,
    axis_font_px: f64,
    title_font_px: f64,
) {
    let width = f64::from(frame.viewport.width);
    let height = f64::from(frame.viewport.height);

    // Baselines: y axis on the left edge, x axis on the bottom edge.
    frame.push_line(
        PlotLayerKind::Axis,
        LinePrimitive::new(0.0, 0.0, 0.0, height, AXIS_STROKE_PX, AXIS_LINE_COLOR),
    );
    frame.push_line(
        PlotLayerKind::Axis,
        LinePrimitive::new(0.0, height, width, height, AXIS_STROKE_PX, AXIS_LINE_COLOR),
    );

    let x_ticks = placed_ticks(x_dimension, width, X_TICK_TARGET_SPACING_PX, X_TICK_MIN_SPACING_PX);
    for (value, pixel) in x_ticks {
        frame.push_line(
            PlotLayerKind::Axis,
            LinePrimitive::new(
                pixel,
                height,
                pixel,
                height + TICK_MARK_PX,
                AXIS_STROKE_PX,
                AXIS_LINE_COLOR,
            ),
        );
        frame.push_text(
            PlotLayerKind::Axis,
            TextPrimitive::new(
                x_dimension.format_tick(value),
                pixel,
                height + TICK_MARK_PX + axis_font_px,
                axis_font_px,
                AXIS_LABEL_COLOR,
                TextHAlign::Center,
            ),
        );
    }

    let y_ticks = placed_ticks(y_dimension, height, Y_TICK_TARGET_SPACING_PX, Y_TICK_MIN_SPACING_PX);
    for (value, pixel) in y_ticks {
        frame.push_line(
            PlotLayerKind::Axis,
            LinePrimitive::new(
                -TICK_MARK_PX,
                pixel,
                0.0,
                pixel,
                AXIS_STROKE_PX,
                AXIS_LINE_COLOR,
            ),
        );
        frame.push_text(
            PlotLayerKind::Axis,
            TextPrimitive::new(
                y_dimension.format_tick(value),
                -TICK_MARK_PX - 4.0,
                pixel + axis_font_px / 2.0,
                axis_font_px,
                AXIS_LABEL_COLOR,
                TextHAlign::Right,
            ),
        );
    }

    if !title.is_empty() {
        frame.push_text(
            PlotLayerKind::Axis,
            TextPrimitive::new(
                title,
                width / 2.0,
                -6.0,
                title_font_px,
                AXIS_LABEL_COLOR,
                TextHAlign::Center,
            ),
        );
    }
}

fn placed_ticks(
    dimension: &dyn Dimension,
    span_px: f64,
    target_spacing_px: f64,
    min_spacing_px: f64,
) -> Vec<(f64, f64)> {
    let target_count = tick_target_count(span_px, target_spacing_px);
    let candidates: Vec<(f64, f64)> = dimension
        .ticks(target_count)
        .into_iter()
        .map(|value| (value, dimension.to_pixel(value)))
        .collect();
    select_ticks_with_min_spacing(candidates, min_spacing_px)
}

#[cfg(test)]
mod tests {
    use super::{build_axis_layer, tick_target_count};
    use crate::core::{Dimension, LinearDimension, Viewport};
    use crate::render::{LayeredRenderFrame, PlotLayerKind};

    #[test]
    fn tick_target_count_scales_with_span() {
        assert_eq!(tick_target_count(914.0, 72.0), 13);
        assert_eq!(tick_target_count(0.0, 72.0), 2);
        assert!(tick_target_count(10_000.0, 72.0) <= 24);
    }

    #[test]
    fn axis_layer_contains_baselines_ticks_and_title() {
        let mut x = LinearDimension::new(0.0, 10.0).expect("x dimension");
        x.set_range(0.0, 914.0).expect("x range");
        let mut y = LinearDimension::new(0.0, 1.0).expect("y dimension");
        y.set_range(462.0, 0.0).expect("y range");

        let mut frame = LayeredRenderFrame::new(Viewport::new(914, 462));
        build_axis_layer(&mut frame, &x, &y, "FOPR", 12.0, 14.0);

        let layer = frame.layer(PlotLayerKind::Axis).expect("axis layer");
        // Two baselines plus at least one tick mark per axis.
        assert!(layer.lines.len() >= 4);
        assert!(layer.texts.iter().any(|text| text.text == "FOPR"));
        // Tick labels exist for both axes.
        assert!(layer.texts.len() >= 3);
    }
}
