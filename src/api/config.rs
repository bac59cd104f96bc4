use serde::{Deserialize, Serialize};

use crate::core::Margins;
use crate::error::{PlotError, PlotResult};

/// Window chrome subtracted from incoming resize dimensions before the
/// plot's own margins are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChromeInsets {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Default for ChromeInsets {
    fn default() -> Self {
        Self {
            horizontal: 80.0,
            vertical: 70.0,
        }
    }
}

/// Public plot bootstrap configuration.
///
/// This type is serializable so host applications can persist/load plot setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Outer element width in pixels; margins are subtracted from this.
    pub width: u32,
    /// Outer element height in pixels; margins are subtracted from this.
    pub height: u32,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub chrome_insets: ChromeInsets,
    /// Approximate pixel spacing between observation markers.
    #[serde(default = "default_marker_spacing_px")]
    pub marker_spacing_px: f64,
    /// Orientation of discrete observation error bars.
    #[serde(default = "default_vertical_error_bar")]
    pub vertical_error_bar: bool,
    #[serde(default = "default_axis_font_px")]
    pub axis_font_px: f64,
    #[serde(default = "default_title_font_px")]
    pub title_font_px: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 512,
            margins: Margins::default(),
            chrome_insets: ChromeInsets::default(),
            marker_spacing_px: default_marker_spacing_px(),
            vertical_error_bar: default_vertical_error_bar(),
            axis_font_px: default_axis_font_px(),
            title_font_px: default_title_font_px(),
        }
    }
}

impl PlotConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_chrome_insets(mut self, insets: ChromeInsets) -> Self {
        self.chrome_insets = insets;
        self
    }

    #[must_use]
    pub fn with_marker_spacing_px(mut self, spacing_px: f64) -> Self {
        self.marker_spacing_px = spacing_px;
        self
    }

    #[must_use]
    pub fn with_vertical_error_bar(mut self, vertical: bool) -> Self {
        self.vertical_error_bar = vertical;
        self
    }

    pub fn validate(self) -> PlotResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PlotError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        for value in [
            self.margins.left,
            self.margins.right,
            self.margins.top,
            self.margins.bottom,
            self.chrome_insets.horizontal,
            self.chrome_insets.vertical,
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlotError::InvalidData(
                    "margins and chrome insets must be finite and >= 0".to_owned(),
                ));
            }
        }
        if !self.marker_spacing_px.is_finite() || self.marker_spacing_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "marker spacing must be finite and > 0".to_owned(),
            ));
        }
        if !self.axis_font_px.is_finite()
            || self.axis_font_px <= 0.0
            || !self.title_font_px.is_finite()
            || self.title_font_px <= 0.0
        {
            return Err(PlotError::InvalidData(
                "font sizes must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> PlotResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_marker_spacing_px() -> f64 {
    20.0
}

fn default_vertical_error_bar() -> bool {
    true
}

fn default_axis_font_px() -> f64 {
    12.0
}

fn default_title_font_px() -> f64 {
    14.0
}

#[cfg(test)]
mod tests {
    use super::PlotConfig;

    #[test]
    fn defaults_match_canvas_plot_geometry() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 512);
        assert_eq!(config.margins.left, 90.0);
        assert_eq!(config.margins.bottom, 30.0);
        assert_eq!(config.chrome_insets.horizontal, 80.0);
        assert!(config.vertical_error_bar);
        config.validate().expect("default config is valid");
    }

    #[test]
    fn zero_size_config_is_rejected() {
        let config = PlotConfig::default().with_size(0, 512);
        assert!(config.validate().is_err());
    }
}
