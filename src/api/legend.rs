use crate::core::Viewport;
use crate::render::{
    CirclePrimitive, LinePrimitive, LayeredRenderFrame, PlotLayerKind, StyleTable, TextHAlign,
    TextPrimitive,
};

/// Glyph vocabulary shown next to legend labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendGlyph {
    SimpleLine,
    CircledLine,
    FilledCircle,
    ErrorBar,
}

/// One legend row: a named style, a label, and the glyph drawn for it.
///
/// Entries are transient and rebuilt on every render pass; their order is
/// the insertion order within that pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub style_key: String,
    pub label: String,
    pub glyph: LegendGlyph,
}

impl LegendEntry {
    #[must_use]
    pub fn new(style_key: impl Into<String>, label: impl Into<String>, glyph: LegendGlyph) -> Self {
        Self {
            style_key: style_key.into(),
            label: label.into(),
            glyph,
        }
    }
}

const GLYPH_WIDTH_PX: f64 = 24.0;
const GLYPH_LABEL_GAP_PX: f64 = 6.0;
const ENTRY_GAP_PX: f64 = 18.0;
const LABEL_CHAR_WIDTH_PX: f64 = 7.0;
const ROW_OFFSET_PX: f64 = 46.0;
const LEGEND_FONT_PX: f64 = 12.0;

/// Lays the accumulated legend entries out as one horizontal row below the
/// drawing area and emits them into the legend layer.
pub(crate) fn build_legend_layer(
    frame: &mut LayeredRenderFrame,
    entries: &[LegendEntry],
    styles: &StyleTable,
) {
    let viewport: Viewport = frame.viewport;
    let row_y = f64::from(viewport.height) + ROW_OFFSET_PX;
    let mut cursor_x = 0.0;

    for entry in entries {
        let style = styles.get(&entry.style_key);
        let glyph_center_x = cursor_x + GLYPH_WIDTH_PX / 2.0;

        match entry.glyph {
            LegendGlyph::SimpleLine => {
                frame.push_line(
                    PlotLayerKind::Legend,
                    LinePrimitive::new(
                        cursor_x,
                        row_y,
                        cursor_x + GLYPH_WIDTH_PX,
                        row_y,
                        style.stroke_width,
                        style.stroke,
                    ),
                );
            }
            LegendGlyph::CircledLine => {
                frame.push_line(
                    PlotLayerKind::Legend,
                    LinePrimitive::new(
                        cursor_x,
                        row_y,
                        cursor_x + GLYPH_WIDTH_PX,
                        row_y,
                        style.stroke_width,
                        style.stroke,
                    ),
                );
                frame.push_circle(
                    PlotLayerKind::Legend,
                    CirclePrimitive::new(
                        glyph_center_x,
                        row_y,
                        style.marker_radius,
                        style.stroke_width,
                        style.stroke,
                        false,
                    ),
                );
            }
            LegendGlyph::FilledCircle => {
                frame.push_circle(
                    PlotLayerKind::Legend,
                    CirclePrimitive::new(
                        glyph_center_x,
                        row_y,
                        style.marker_radius.max(3.0),
                        style.stroke_width,
                        style.fill,
                        true,
                    ),
                );
            }
            LegendGlyph::ErrorBar => {
                let half_height = 6.0;
                let cap_half = 4.0;
                frame.push_line(
                    PlotLayerKind::Legend,
                    LinePrimitive::new(
                        glyph_center_x,
                        row_y - half_height,
                        glyph_center_x,
                        row_y + half_height,
                        style.stroke_width,
                        style.stroke,
                    ),
                );
                for end_y in [row_y - half_height, row_y + half_height] {
                    frame.push_line(
                        PlotLayerKind::Legend,
                        LinePrimitive::new(
                            glyph_center_x - cap_half,
                            end_y,
                            glyph_center_x + cap_half,
                            end_y,
                            style.stroke_width,
                            style.stroke,
                        ),
                    );
                }
            }
        }

        let label_x = cursor_x + GLYPH_WIDTH_PX + GLYPH_LABEL_GAP_PX;
        frame.push_text(
            PlotLayerKind::Legend,
            TextPrimitive::new(
                entry.label.clone(),
                label_x,
                row_y + LEGEND_FONT_PX / 2.0,
                LEGEND_FONT_PX,
                style.stroke,
                TextHAlign::Left,
            ),
        );

        let label_width = entry.label.chars().count() as f64 * LABEL_CHAR_WIDTH_PX;
        cursor_x = label_x + label_width + ENTRY_GAP_PX;
    }
}

#[cfg(test)]
mod tests {
    use super::{LegendEntry, LegendGlyph, build_legend_layer};
    use crate::core::Viewport;
    use crate::render::{LayeredRenderFrame, PlotLayerKind, STYLE_OBSERVATION, StyleTable};

    #[test]
    fn legend_row_emits_one_label_per_entry() {
        let mut frame = LayeredRenderFrame::new(Viewport::new(400, 200));
        let entries = vec![
            LegendEntry::new(STYLE_OBSERVATION, "Observation", LegendGlyph::CircledLine),
            LegendEntry::new("refcase", "Refcase", LegendGlyph::SimpleLine),
        ];
        build_legend_layer(&mut frame, &entries, &StyleTable::default());

        let layer = frame.layer(PlotLayerKind::Legend).expect("legend layer");
        assert_eq!(layer.texts.len(), 2);
        assert_eq!(layer.texts[0].text, "Observation");
        assert_eq!(layer.texts[1].text, "Refcase");
        // Entries advance left to right.
        assert!(layer.texts[0].x < layer.texts[1].x);
    }

    #[test]
    fn error_bar_glyph_draws_bar_and_caps() {
        let mut frame = LayeredRenderFrame::new(Viewport::new(400, 200));
        let entries = vec![LegendEntry::new(
            "observation_error_bar",
            "Observation error bar",
            LegendGlyph::ErrorBar,
        )];
        build_legend_layer(&mut frame, &entries, &StyleTable::default());

        let layer = frame.layer(PlotLayerKind::Legend).expect("legend layer");
        assert_eq!(layer.lines.len(), 3);
    }
}
