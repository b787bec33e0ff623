use serde::{Deserialize, Serialize};

use crate::core::Viewport;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load widget
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelEngineConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    /// Inset between the viewport edge and the wheel rim. One margin serves
    /// drawing and hit-testing alike.
    #[serde(default = "default_wheel_margin_px")]
    pub wheel_margin_px: f64,
    /// Inset between the viewport edge and the radar grid rim.
    #[serde(default = "default_radar_margin_px")]
    pub radar_margin_px: f64,
}

impl WheelEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            wheel_margin_px: default_wheel_margin_px(),
            radar_margin_px: default_radar_margin_px(),
        }
    }

    #[must_use]
    pub fn with_wheel_margin(mut self, margin_px: f64) -> Self {
        self.wheel_margin_px = margin_px;
        self
    }

    #[must_use]
    pub fn with_radar_margin(mut self, margin_px: f64) -> Self {
        self.radar_margin_px = margin_px;
        self
    }
}

impl Default for WheelEngineConfig {
    fn default() -> Self {
        Self::new(default_viewport())
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(800, 800)
}

fn default_wheel_margin_px() -> f64 {
    80.0
}

fn default_radar_margin_px() -> f64 {
    60.0
}
