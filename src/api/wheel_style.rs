use crate::render::Color;

/// Style contract for wheel and radar frames.
///
/// Area wedge colors are fixed by [`crate::core::Area::color`]; this struct
/// covers everything else. Defaults reproduce the reference palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelStyle {
    /// Concentric reference rings behind the wedges.
    pub ring_color: Color,
    pub ring_width: f64,
    /// Full-radius outline drawn over every segment span.
    pub outline_color: Color,
    pub outline_width: f64,
    /// Emphasized outline drawn over the selected segment.
    pub highlight_color: Color,
    pub highlight_width: f64,
    /// Area name and `n/10` labels outside the rim.
    pub label_color: Color,
    pub label_font_px: f64,
    /// Distance from the rim to the label anchor.
    pub label_offset_px: f64,
    pub radar_grid_color: Color,
    pub radar_grid_width: f64,
    pub radar_fill_color: Color,
    pub radar_stroke_color: Color,
    pub radar_stroke_width: f64,
}

impl Default for WheelStyle {
    fn default() -> Self {
        Self {
            ring_color: Color::from_rgb8(0xE0, 0xE0, 0xE0),
            ring_width: 1.0,
            outline_color: Color::from_rgb8(0x2C, 0x3E, 0x50),
            outline_width: 2.0,
            highlight_color: Color::from_rgb8(0x00, 0xA8, 0xE8),
            highlight_width: 4.0,
            label_color: Color::from_rgb8(0x2C, 0x3E, 0x50),
            label_font_px: 13.0,
            label_offset_px: 34.0,
            radar_grid_color: Color::from_rgb8(0xE2, 0xE8, 0xF0),
            radar_grid_width: 1.0,
            radar_fill_color: Color::from_rgb8(0x89, 0xCF, 0xF0).with_alpha(0.2),
            radar_stroke_color: Color::from_rgb8(0x00, 0xA8, 0xE8),
            radar_stroke_width: 2.0,
        }
    }
}
