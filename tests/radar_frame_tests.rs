use approx::assert_relative_eq;
use lifewheel::api::{WheelStyle, build_radar_frame};
use lifewheel::core::{LevelVector, Viewport, WheelGeometry};
use lifewheel::summary::Summary;

fn radar_frame(values: [i32; 8]) -> lifewheel::render::RenderFrame {
    let levels = LevelVector::from_values(values).expect("valid levels");
    let summary = Summary::from_levels(&levels);
    build_radar_frame(
        Viewport::new(800, 800),
        &summary.radar,
        60.0,
        &WheelStyle::default(),
    )
    .expect("build radar frame")
}

#[test]
fn radar_frame_has_grid_spokes_polygon_and_labels() {
    let frame = radar_frame([3, 9, 7, 2, 10, 5, 6, 4]);
    frame.validate().expect("valid frame");

    assert_eq!(frame.circles.len(), 4, "quarter-fraction grid rings");
    assert_eq!(frame.lines.len(), 8, "one spoke per area");
    assert_eq!(frame.polygons.len(), 1);
    assert_eq!(frame.texts.len(), 8, "one label per axis");
}

#[test]
fn polygon_has_eight_vertices_at_level_radii() {
    let frame = radar_frame([10, 1, 1, 1, 1, 1, 1, 1]);
    let polygon = &frame.polygons[0];
    assert_eq!(polygon.points.len(), 8);

    let geometry = WheelGeometry::fit_viewport(Viewport::new(800, 800), 60.0)
        .expect("valid geometry");
    let (cx, cy) = geometry.center();

    // Axis 0 points straight up; level 10 reaches the grid rim.
    let (x0, y0) = polygon.points[0];
    assert_relative_eq!(x0, cx, epsilon = 1e-9);
    assert_relative_eq!(y0, cy - geometry.radius(), epsilon = 1e-9);

    // Axis 2 points right; level 1 sits at a tenth of the radius.
    let (x2, y2) = polygon.points[2];
    assert_relative_eq!(x2, cx + geometry.radius() / 10.0, epsilon = 1e-9);
    assert_relative_eq!(y2, cy, epsilon = 1e-9);
}

#[test]
fn radar_polygon_uses_translucent_fill() {
    let style = WheelStyle::default();
    let frame = radar_frame([5, 5, 5, 5, 5, 5, 5, 5]);
    let polygon = &frame.polygons[0];
    assert_eq!(polygon.fill_color, Some(style.radar_fill_color));
    assert!(style.radar_fill_color.alpha < 1.0);
}
