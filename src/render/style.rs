use indexmap::IndexMap;

use crate::error::PlotResult;
use crate::render::Color;

pub const STYLE_DEFAULT: &str = "default";
pub const STYLE_OBSERVATION: &str = "observation";
pub const STYLE_OBSERVATION_AREA: &str = "observation_area";
pub const STYLE_OBSERVATION_ERROR_BAR: &str = "observation_error_bar";
pub const STYLE_REFCASE: &str = "refcase";

/// Stroke/fill styling consumed by geometry emission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotStyle {
    pub stroke: Color,
    pub fill: Color,
    pub stroke_width: f64,
    pub marker_radius: f64,
}

impl PlotStyle {
    pub fn validate(self) -> PlotResult<()> {
        self.stroke.validate()?;
        self.fill.validate()
    }
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            stroke: Color::rgb(0.25, 0.63, 1.0),
            fill: Color::rgba(0.25, 0.63, 1.0, 0.35),
            stroke_width: 1.5,
            marker_radius: 3.0,
        }
    }
}

/// Named style lookup owned by one plot instance.
///
/// Replaces a process-wide style registry: hosts override entries per plot,
/// and unknown keys fall back to the `default` entry so a missing style can
/// never abort a draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    styles: IndexMap<String, PlotStyle>,
}

impl Default for StyleTable {
    fn default() -> Self {
        let mut styles = IndexMap::new();
        styles.insert(STYLE_DEFAULT.to_owned(), PlotStyle::default());
        styles.insert(
            STYLE_OBSERVATION.to_owned(),
            PlotStyle {
                stroke: Color::rgb(0.0, 0.0, 0.0),
                fill: Color::rgb(0.0, 0.0, 0.0),
                stroke_width: 1.5,
                marker_radius: 2.5,
            },
        );
        styles.insert(
            STYLE_OBSERVATION_AREA.to_owned(),
            PlotStyle {
                stroke: Color::rgba(0.27, 0.27, 0.27, 0.5),
                fill: Color::rgba(0.46, 0.46, 0.46, 0.35),
                stroke_width: 1.0,
                marker_radius: 2.5,
            },
        );
        styles.insert(
            STYLE_OBSERVATION_ERROR_BAR.to_owned(),
            PlotStyle {
                stroke: Color::rgb(0.15, 0.15, 0.15),
                fill: Color::rgb(0.15, 0.15, 0.15),
                stroke_width: 1.2,
                marker_radius: 2.0,
            },
        );
        styles.insert(
            STYLE_REFCASE.to_owned(),
            PlotStyle {
                stroke: Color::rgb(0.0, 0.4, 0.0),
                fill: Color::rgba(0.0, 0.4, 0.0, 0.3),
                stroke_width: 1.5,
                marker_radius: 2.5,
            },
        );
        Self { styles }
    }
}

impl StyleTable {
    /// Looks up a named style, falling back to the default entry.
    #[must_use]
    pub fn get(&self, key: &str) -> PlotStyle {
        self.styles
            .get(key)
            .copied()
            .or_else(|| self.styles.get(STYLE_DEFAULT).copied())
            .unwrap_or_default()
    }

    pub fn set(&mut self, key: impl Into<String>, style: PlotStyle) -> PlotResult<()> {
        style.validate()?;
        self.styles.insert(key.into(), style);
        Ok(())
    }

    /// Style keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }
}
