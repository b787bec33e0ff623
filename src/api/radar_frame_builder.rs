use crate::core::{AREA_COUNT, Viewport, WheelGeometry};
use crate::error::WheelResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, PolygonPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};
use crate::summary::RadarPoint;

use super::WheelStyle;

const GRID_FRACTIONS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Builds the results radar scene from the summary's ordered
/// `(area, level)` records.
///
/// Each area gets one axis; axis 0 points at the top and axes advance
/// clockwise, mirroring the wheel's segment order. The level polygon is a
/// closed translucent shape whose vertex radii are `level / 10` of the grid
/// radius.
pub fn build_radar_frame(
    viewport: Viewport,
    radar: &[RadarPoint; AREA_COUNT],
    margin_px: f64,
    style: &WheelStyle,
) -> WheelResult<RenderFrame> {
    let geometry = WheelGeometry::fit_viewport(viewport, margin_px)?;
    let (cx, cy) = geometry.center();
    let radius = geometry.radius();
    let mut frame = RenderFrame::new(viewport);

    for fraction in GRID_FRACTIONS {
        frame = frame.with_circle(CirclePrimitive::new(
            cx,
            cy,
            radius * fraction,
            style.radar_grid_width,
            style.radar_grid_color,
        ));
    }

    for index in 0..AREA_COUNT {
        let (x, y) = geometry.point_at(geometry.segment_start_angle(index), radius);
        frame = frame.with_line(LinePrimitive::new(
            cx,
            cy,
            x,
            y,
            style.radar_grid_width,
            style.radar_grid_color,
        ));
    }

    let vertices: Vec<(f64, f64)> = radar
        .iter()
        .map(|point| {
            geometry.point_at(
                geometry.segment_start_angle(point.area.index()),
                radius * point.level.radial_fraction(),
            )
        })
        .collect();
    frame = frame.with_polygon(PolygonPrimitive::new(
        vertices,
        Some(style.radar_fill_color),
        style.radar_stroke_width,
        style.radar_stroke_color,
    ));

    for point in radar {
        let (x, y) = geometry.point_at(
            geometry.segment_start_angle(point.area.index()),
            radius + style.label_offset_px * 0.6,
        );
        frame = frame.with_text(TextPrimitive::new(
            point.area.label(),
            x,
            y - style.label_font_px / 2.0,
            style.label_font_px,
            style.label_color,
            TextHAlign::Center,
        ));
    }

    frame.validate()?;
    Ok(frame)
}
