use crate::error::WheelResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_circle_count: usize,
    pub last_wedge_count: usize,
    pub last_line_count: usize,
    pub last_polygon_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> WheelResult<()> {
        frame.validate()?;
        self.last_circle_count = frame.circles.len();
        self.last_wedge_count = frame.wedges.len();
        self.last_line_count = frame.lines.len();
        self.last_polygon_count = frame.polygons.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
