pub mod area;
pub mod geometry;
pub mod levels;
pub mod types;

pub use area::{AREA_COUNT, Area};
pub use geometry::{SEGMENT_ANGLE_STEP, WheelGeometry};
pub use levels::{Level, LevelVector};
pub use types::Viewport;
