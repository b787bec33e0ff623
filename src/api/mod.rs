mod engine;
mod engine_config;
mod radar_frame_builder;
mod validation;
mod wheel_frame_builder;
mod wheel_style;

pub use engine::{EngineSnapshot, WheelEngine};
pub use engine_config::WheelEngineConfig;
pub use radar_frame_builder::build_radar_frame;
pub use wheel_frame_builder::build_wheel_frame;
pub use wheel_style::WheelStyle;
