use lifewheel::api::WheelEngineConfig;
use lifewheel::core::Viewport;

#[test]
fn config_round_trips_through_json() {
    let config = WheelEngineConfig::new(Viewport::new(640, 640))
        .with_wheel_margin(64.0)
        .with_radar_margin(48.0);

    let json = serde_json::to_string(&config).expect("serialize config");
    let restored: WheelEngineConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(restored, config);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let restored: WheelEngineConfig = serde_json::from_str("{}").expect("deserialize empty");
    assert_eq!(restored, WheelEngineConfig::default());
    assert_eq!(restored.viewport, Viewport::new(800, 800));
    assert_eq!(restored.wheel_margin_px, 80.0);
    assert_eq!(restored.radar_margin_px, 60.0);
}

#[test]
fn partial_config_keeps_remaining_defaults() {
    let restored: WheelEngineConfig =
        serde_json::from_str(r#"{"viewport":{"width":400,"height":400},"wheel_margin_px":20.0}"#)
            .expect("deserialize partial");
    assert_eq!(restored.viewport, Viewport::new(400, 400));
    assert_eq!(restored.wheel_margin_px, 20.0);
    assert_eq!(restored.radar_margin_px, 60.0);
}
