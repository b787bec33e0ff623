use std::f64::consts::FRAC_PI_2;

use lifewheel::core::{Area, SEGMENT_ANGLE_STEP, WheelGeometry};
use lifewheel::interaction::resolve_click;

fn geometry() -> WheelGeometry {
    WheelGeometry::new(400.0, 400.0, 320.0).expect("valid geometry")
}

/// Surface point at a wheel angle (clockwise from top) and center distance.
fn point_at_wheel_angle(geometry: WheelGeometry, wheel_angle: f64, distance: f64) -> (f64, f64) {
    geometry.point_at(wheel_angle - FRAC_PI_2, distance)
}

#[test]
fn every_segment_is_hit_at_its_bisector() {
    let geometry = geometry();
    for (index, expected) in Area::ALL.iter().enumerate() {
        let angle = (index as f64 + 0.5) * SEGMENT_ANGLE_STEP;
        let (x, y) = point_at_wheel_angle(geometry, angle, 160.0);
        let hit = resolve_click(geometry, x, y).expect("inside the wheel");
        assert_eq!(hit.area, *expected, "segment index {index}");
    }
}

#[test]
fn center_click_maps_to_level_one_for_any_angle() {
    let geometry = geometry();
    let hit = resolve_click(geometry, 400.0, 400.0).expect("center is inside");
    assert_eq!(hit.level.get(), 1);
}

#[test]
fn top_click_maps_to_segment_zero() {
    let geometry = geometry();
    let (x, y) = point_at_wheel_angle(geometry, 0.0, 200.0);
    let hit = resolve_click(geometry, x, y).expect("inside the wheel");
    assert_eq!(hit.area, Area::Health);
}

#[test]
fn boundary_angle_belongs_to_the_following_segment() {
    let geometry = geometry();
    // Due right of center: exactly on the boundary between segments 1 and
    // 2, with no trigonometric rounding involved.
    let hit = resolve_click(geometry, 720.0, 400.0).expect("inside the wheel");
    assert_eq!(hit.area, Area::Friends);
}

#[test]
fn level_scales_with_distance() {
    let geometry = geometry();
    let radius = geometry.radius();
    for (fraction, expected_level) in [(0.05, 1), (0.25, 3), (0.55, 6), (0.95, 10), (0.999, 10)] {
        let (x, y) = point_at_wheel_angle(geometry, 0.1, radius * fraction);
        let hit = resolve_click(geometry, x, y).expect("inside the wheel");
        assert_eq!(
            hit.level.get(),
            expected_level,
            "distance fraction {fraction}"
        );
    }
}

#[test]
fn clicks_beyond_the_rim_are_ignored() {
    let geometry = geometry();
    let (x, y) = point_at_wheel_angle(geometry, 1.0, geometry.radius() * 1.01);
    assert!(resolve_click(geometry, x, y).is_none());
}
