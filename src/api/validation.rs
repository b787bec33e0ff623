use crate::error::{WheelError, WheelResult};

use super::{WheelEngineConfig, WheelStyle};

pub(super) fn validate_style(style: WheelStyle) -> WheelResult<()> {
    style.ring_color.validate()?;
    style.outline_color.validate()?;
    style.highlight_color.validate()?;
    style.label_color.validate()?;
    style.radar_grid_color.validate()?;
    style.radar_fill_color.validate()?;
    style.radar_stroke_color.validate()?;

    for (name, width) in [
        ("ring_width", style.ring_width),
        ("outline_width", style.outline_width),
        ("highlight_width", style.highlight_width),
        ("radar_grid_width", style.radar_grid_width),
        ("radar_stroke_width", style.radar_stroke_width),
    ] {
        if !width.is_finite() || width <= 0.0 {
            return Err(WheelError::InvalidData(format!(
                "style `{name}` must be finite and > 0"
            )));
        }
    }

    if !style.label_font_px.is_finite() || style.label_font_px <= 0.0 {
        return Err(WheelError::InvalidData(
            "style `label_font_px` must be finite and > 0".to_owned(),
        ));
    }
    if !style.label_offset_px.is_finite() || style.label_offset_px < 0.0 {
        return Err(WheelError::InvalidData(
            "style `label_offset_px` must be finite and >= 0".to_owned(),
        ));
    }

    Ok(())
}

pub(super) fn validate_config(config: WheelEngineConfig) -> WheelResult<()> {
    if !config.viewport.is_valid() {
        return Err(WheelError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }
    for (name, margin) in [
        ("wheel_margin_px", config.wheel_margin_px),
        ("radar_margin_px", config.radar_margin_px),
    ] {
        if !margin.is_finite() || margin < 0.0 {
            return Err(WheelError::InvalidData(format!(
                "config `{name}` must be finite and >= 0"
            )));
        }
    }
    Ok(())
}
