//! lifewheel: interactive "Wheel of Life" self-assessment widget.
//!
//! The crate keeps a strict split between a pure, headless core (areas,
//! levels, wheel geometry, hit-testing, summary derivation) and rendering
//! backends that replay backend-agnostic frames.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod summary;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{WheelEngine, WheelEngineConfig};
pub use error::{WheelError, WheelResult};
