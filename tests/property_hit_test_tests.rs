use std::f64::consts::TAU;

use lifewheel::core::WheelGeometry;
use lifewheel::interaction::resolve_click;
use proptest::prelude::*;

fn geometry() -> WheelGeometry {
    WheelGeometry::new(400.0, 400.0, 320.0).expect("valid geometry")
}

proptest! {
    #[test]
    fn inside_clicks_always_resolve_in_band(
        angle in 0.0f64..TAU,
        distance_factor in 0.0f64..0.999
    ) {
        let geometry = geometry();
        let distance = geometry.radius() * distance_factor;
        let (x, y) = geometry.point_at(angle, distance);

        let hit = resolve_click(geometry, x, y).expect("inside the wheel");
        prop_assert!(hit.area.index() < 8);
        prop_assert!((1..=10).contains(&hit.level.get()));
    }

    #[test]
    fn level_is_monotone_in_distance(
        angle in 0.0f64..TAU,
        near_factor in 0.0f64..0.99,
        extra_factor in 0.0f64..1.0
    ) {
        let geometry = geometry();
        let far_factor = near_factor + extra_factor * (0.99 - near_factor);
        let (near_x, near_y) = geometry.point_at(angle, geometry.radius() * near_factor);
        let (far_x, far_y) = geometry.point_at(angle, geometry.radius() * far_factor);

        let near = resolve_click(geometry, near_x, near_y).expect("inside");
        let far = resolve_click(geometry, far_x, far_y).expect("inside");
        prop_assert!(far.level >= near.level);
    }

    #[test]
    fn outside_clicks_never_resolve(
        angle in 0.0f64..TAU,
        distance_factor in 1.001f64..50.0
    ) {
        let geometry = geometry();
        let (x, y) = geometry.point_at(angle, geometry.radius() * distance_factor);
        prop_assert!(resolve_click(geometry, x, y).is_none());
    }

    #[test]
    fn hit_resolution_is_deterministic(
        x in 0.0f64..800.0,
        y in 0.0f64..800.0
    ) {
        let geometry = geometry();
        prop_assert_eq!(resolve_click(geometry, x, y), resolve_click(geometry, x, y));
    }
}
