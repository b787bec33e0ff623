//! Pointer-input mapping: click position → (segment, level).

use serde::{Deserialize, Serialize};

use crate::core::{Area, Level, SEGMENT_ANGLE_STEP, WheelGeometry};

/// Outcome of a pointer click that landed inside the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelHit {
    pub area: Area,
    pub level: Level,
}

/// Maps a pointer position (surface-relative, +y down) onto the wheel.
///
/// Returns `None` when the click falls outside the wheel disc; such clicks
/// are ignored rather than treated as errors. The segment index is
/// floor-based, so a click exactly on a boundary angle belongs to the
/// following segment, and the top of the wheel belongs to segment 0.
#[must_use]
pub fn resolve_click(geometry: WheelGeometry, x: f64, y: f64) -> Option<WheelHit> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }

    let distance = geometry.distance_from_center(x, y);
    if distance > geometry.radius() {
        return None;
    }

    let angle = geometry.wheel_angle(x, y);
    let index = (angle / SEGMENT_ANGLE_STEP) as usize;
    // `wheel_angle` is < 2π, but guard the floating-point edge anyway.
    let area = Area::from_index(index).unwrap_or(Area::Health);

    let level = Level::from_clamped((distance / geometry.radius() * 10.0).ceil() as i32);

    Some(WheelHit { area, level })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> WheelGeometry {
        WheelGeometry::new(400.0, 400.0, 320.0).expect("valid geometry")
    }

    #[test]
    fn center_click_is_level_one() {
        let hit = resolve_click(geometry(), 400.0, 400.0).expect("center is inside");
        assert_eq!(hit.level, Level::MIN);
    }

    #[test]
    fn top_click_selects_first_segment() {
        let hit = resolve_click(geometry(), 400.0, 100.0).expect("top is inside");
        assert_eq!(hit.area, Area::Health);
    }

    #[test]
    fn outside_click_is_ignored() {
        assert!(resolve_click(geometry(), 400.0, 400.0 - 320.1).is_none());
        assert!(resolve_click(geometry(), 0.0, 0.0).is_none());
    }

    #[test]
    fn rim_click_is_level_ten() {
        let hit = resolve_click(geometry(), 400.0 + 320.0, 400.0).expect("rim is inside");
        assert_eq!(hit.level, Level::MAX);
    }

    #[test]
    fn non_finite_input_is_ignored() {
        assert!(resolve_click(geometry(), f64::NAN, 100.0).is_none());
        assert!(resolve_click(geometry(), 100.0, f64::INFINITY).is_none());
    }
}
