use crate::core::{AREA_COUNT, Area, LevelVector, Viewport, WheelGeometry};
use crate::error::WheelResult;
use crate::render::{
    CirclePrimitive, RenderFrame, TextHAlign, TextPrimitive, WedgePrimitive,
};

use super::WheelStyle;

const REFERENCE_RING_COUNT: u32 = 10;

/// Builds the wheel scene as a pure function of state.
///
/// Draw order: the ten level rings first, then per segment a level-scaled
/// fill and a full-radius outline, then the selection emphasis on top,
/// then rim labels.
pub fn build_wheel_frame(
    viewport: Viewport,
    geometry: WheelGeometry,
    levels: &LevelVector,
    selection: Option<Area>,
    style: &WheelStyle,
) -> WheelResult<RenderFrame> {
    let (cx, cy) = geometry.center();
    let radius = geometry.radius();
    let mut frame = RenderFrame::new(viewport);

    for i in 1..=REFERENCE_RING_COUNT {
        frame = frame.with_circle(CirclePrimitive::new(
            cx,
            cy,
            radius * f64::from(i) / f64::from(REFERENCE_RING_COUNT),
            style.ring_width,
            style.ring_color,
        ));
    }

    for (area, level) in levels.iter() {
        let index = area.index();
        let start = geometry.segment_start_angle(index);
        let end = geometry.segment_end_angle(index);

        frame = frame.with_wedge(WedgePrimitive::filled(
            cx,
            cy,
            radius * level.radial_fraction(),
            start,
            end,
            area.color(),
        ));
        frame = frame.with_wedge(WedgePrimitive::outlined(
            cx,
            cy,
            radius,
            start,
            end,
            style.outline_width,
            style.outline_color,
        ));
    }

    if let Some(selected) = selection {
        let index = selected.index();
        frame = frame.with_wedge(WedgePrimitive::outlined(
            cx,
            cy,
            radius,
            geometry.segment_start_angle(index),
            geometry.segment_end_angle(index),
            style.highlight_width,
            style.highlight_color,
        ));
    }

    for (area, level) in levels.iter() {
        let mid = geometry.segment_mid_angle(area.index());
        let (lx, ly) = geometry.point_at(mid, radius + style.label_offset_px);
        frame = frame.with_text(TextPrimitive::new(
            area.label(),
            lx,
            ly - style.label_font_px,
            style.label_font_px,
            style.label_color,
            TextHAlign::Center,
        ));
        frame = frame.with_text(TextPrimitive::new(
            format!("{}/10", level.get()),
            lx,
            ly + 2.0,
            style.label_font_px * 0.85,
            style.label_color,
            TextHAlign::Center,
        ));
    }

    debug_assert_eq!(frame.texts.len(), AREA_COUNT * 2);
    frame.validate()?;
    Ok(frame)
}
