use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(PlotError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(PlotError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Vertex of a filled polygon in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonVertex {
    pub x: f64,
    pub y: f64,
}

/// Draw command for one filled polygon (e.g. an observation error envelope).
///
/// The vertex list is treated as implicitly closed.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub vertices: Vec<PolygonVertex>,
    pub fill_color: Color,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(vertices: Vec<PolygonVertex>, fill_color: Color) -> Self {
        Self {
            vertices,
            fill_color,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.vertices.len() < 3 {
            return Err(PlotError::InvalidData(
                "polygon needs at least 3 vertices".to_owned(),
            ));
        }
        for vertex in &self.vertices {
            if !vertex.x.is_finite() || !vertex.y.is_finite() {
                return Err(PlotError::InvalidData(
                    "polygon vertices must be finite".to_owned(),
                ));
            }
        }
        self.fill_color.validate()
    }
}

/// Draw command for one circle marker in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub filled: bool,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(
        x: f64,
        y: f64,
        radius: f64,
        stroke_width: f64,
        color: Color,
        filled: bool,
    ) -> Self {
        Self {
            x,
            y,
            radius,
            stroke_width,
            color,
            filled,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(PlotError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(PlotError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(PlotError::InvalidData(
                "circle stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.text.is_empty() {
            return Err(PlotError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(PlotError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, LinePrimitive, PolygonPrimitive, PolygonVertex};

    #[test]
    fn out_of_range_color_channel_is_rejected() {
        assert!(Color::rgba(0.2, 0.2, 1.4, 1.0).validate().is_err());
        assert!(Color::rgb(0.0, 0.5, 1.0).validate().is_ok());
    }

    #[test]
    fn degenerate_polygon_is_rejected() {
        let polygon = PolygonPrimitive::new(
            vec![
                PolygonVertex { x: 0.0, y: 0.0 },
                PolygonVertex { x: 1.0, y: 1.0 },
            ],
            Color::rgb(0.1, 0.1, 0.1),
        );
        assert!(polygon.validate().is_err());
    }

    #[test]
    fn zero_width_line_is_rejected() {
        let line = LinePrimitive::new(0.0, 0.0, 1.0, 1.0, 0.0, Color::rgb(0.0, 0.0, 0.0));
        assert!(line.validate().is_err());
    }
}
