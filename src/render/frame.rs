use crate::core::Viewport;
use crate::error::{WheelError, WheelResult};
use crate::render::{
    CirclePrimitive, LinePrimitive, PolygonPrimitive, TextPrimitive, WedgePrimitive,
};

/// Backend-agnostic scene for one draw pass.
///
/// Primitive vectors replay in declaration order: circles, wedges, lines,
/// polygons, texts. Within each vector later entries draw on top, which is
/// how the selection emphasis lands above the plain outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub circles: Vec<CirclePrimitive>,
    pub wedges: Vec<WedgePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            circles: Vec::new(),
            wedges: Vec::new(),
            lines: Vec::new(),
            polygons: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_wedge(mut self, wedge: WedgePrimitive) -> Self {
        self.wedges.push(wedge);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PolygonPrimitive) -> Self {
        self.polygons.push(polygon);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> WheelResult<()> {
        if !self.viewport.is_valid() {
            return Err(WheelError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for circle in &self.circles {
            circle.validate()?;
        }
        for wedge in &self.wedges {
            wedge.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
            && self.wedges.is_empty()
            && self.lines.is_empty()
            && self.polygons.is_empty()
            && self.texts.is_empty()
    }
}
