use crate::error::{WheelError, WheelResult};

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

    /// Builds a color from 8-bit channels, e.g. a `#RRGGBB` palette entry.
    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(red as f64 / 255.0, green as f64 / 255.0, blue as f64 / 255.0)
    }

    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn validate(self) -> WheelResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(WheelError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke-only full circle, used for the concentric reference rings and
/// radar grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> WheelResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(WheelError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(WheelError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(WheelError::InvalidData(
                "circle stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Pie-slice path: center → arc from `start_angle` to `end_angle` at
/// `radius` → close. Angles are in drawing space (`atan2` convention,
/// +y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WedgePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub fill_color: Option<Color>,
    pub border_width: f64,
    pub border_color: Color,
}

impl WedgePrimitive {
    #[must_use]
    pub fn filled(
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        fill_color: Color,
    ) -> Self {
        Self {
            cx,
            cy,
            radius,
            start_angle,
            end_angle,
            fill_color: Some(fill_color),
            border_width: 0.0,
            border_color: Color::rgb(0.0, 0.0, 0.0),
        }
    }

    #[must_use]
    pub fn outlined(
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        border_width: f64,
        border_color: Color,
    ) -> Self {
        Self {
            cx,
            cy,
            radius,
            start_angle,
            end_angle,
            fill_color: None,
            border_width,
            border_color,
        }
    }

    pub fn validate(self) -> WheelResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(WheelError::InvalidData(
                "wedge center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(WheelError::InvalidData(
                "wedge radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.start_angle.is_finite()
            || !self.end_angle.is_finite()
            || self.end_angle <= self.start_angle
        {
            return Err(WheelError::InvalidData(
                "wedge angles must be finite with end > start".to_owned(),
            ));
        }
        if self.fill_color.is_none() && self.border_width <= 0.0 {
            return Err(WheelError::InvalidData(
                "wedge must have a fill or a positive border width".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(WheelError::InvalidData(
                "wedge border width must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(fill) = self.fill_color {
            fill.validate()?;
        }
        self.border_color.validate()
    }
}

/// Draw command for one line segment in pixel space. Used for radar spokes.
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

    pub fn validate(self) -> WheelResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(WheelError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(WheelError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Closed polygon with optional translucent fill. Used for the radar level
/// shape.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub points: Vec<(f64, f64)>,
    pub fill_color: Option<Color>,
    pub stroke_width: f64,
    pub stroke_color: Color,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(
        points: Vec<(f64, f64)>,
        fill_color: Option<Color>,
        stroke_width: f64,
        stroke_color: Color,
    ) -> Self {
        Self {
            points,
            fill_color,
            stroke_width,
            stroke_color,
        }
    }

    pub fn validate(&self) -> WheelResult<()> {
        if self.points.len() < 3 {
            return Err(WheelError::InvalidData(
                "polygon needs at least 3 points".to_owned(),
            ));
        }
        for (x, y) in &self.points {
            if !x.is_finite() || !y.is_finite() {
                return Err(WheelError::InvalidData(
                    "polygon coordinates must be finite".to_owned(),
                ));
            }
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(WheelError::InvalidData(
                "polygon stroke width must be finite and >= 0".to_owned(),
            ));
        }
        if self.fill_color.is_none() && self.stroke_width <= 0.0 {
            return Err(WheelError::InvalidData(
                "polygon must have a fill or a positive stroke width".to_owned(),
            ));
        }
        if let Some(fill) = self.fill_color {
            fill.validate()?;
        }
        self.stroke_color.validate()
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

    pub fn validate(&self) -> WheelResult<()> {
        if self.text.is_empty() {
            return Err(WheelError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(WheelError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(WheelError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
