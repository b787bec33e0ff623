use std::f64::consts::{FRAC_PI_2, TAU};

use crate::core::area::AREA_COUNT;
use crate::core::types::Viewport;
use crate::error::{WheelError, WheelResult};

/// Angular span of one segment: `2π / 8`.
pub const SEGMENT_ANGLE_STEP: f64 = TAU / AREA_COUNT as f64;

/// Center and radius of the wheel inside a viewport.
///
/// One geometry serves both drawing and hit-testing, so the clickable disc
/// and the drawn disc always coincide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    center_x: f64,
    center_y: f64,
    radius: f64,
}

impl WheelGeometry {
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> WheelResult<Self> {
        if !center_x.is_finite() || !center_y.is_finite() {
            return Err(WheelError::InvalidGeometry(
                "wheel center must be finite".to_owned(),
            ));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(WheelError::InvalidGeometry(
                "wheel radius must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            center_x,
            center_y,
            radius,
        })
    }

    /// Centers the wheel in a viewport, inset by `margin_px` on the
    /// limiting side.
    pub fn fit_viewport(viewport: Viewport, margin_px: f64) -> WheelResult<Self> {
        if !viewport.is_valid() {
            return Err(WheelError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !margin_px.is_finite() || margin_px < 0.0 {
            return Err(WheelError::InvalidGeometry(
                "wheel margin must be finite and >= 0".to_owned(),
            ));
        }

        let center_x = f64::from(viewport.width) / 2.0;
        let center_y = f64::from(viewport.height) / 2.0;
        let radius = center_x.min(center_y) - margin_px;
        Self::new(center_x, center_y, radius)
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (self.center_x, self.center_y)
    }

    #[must_use]
    pub fn radius(self) -> f64 {
        self.radius
    }

    /// Distance from the wheel center to a point.
    #[must_use]
    pub fn distance_from_center(self, x: f64, y: f64) -> f64 {
        (x - self.center_x).hypot(y - self.center_y)
    }

    /// Wheel angle of a point, measured clockwise from the top of the
    /// wheel, in `[0, 2π)`.
    ///
    /// Screen space has +y down, so `atan2` measures from the +x axis
    /// toward the bottom; adding `π/2` rotates the origin to the top.
    #[must_use]
    pub fn wheel_angle(self, x: f64, y: f64) -> f64 {
        let mut angle = (y - self.center_y).atan2(x - self.center_x) + FRAC_PI_2;
        if angle < 0.0 {
            angle += TAU;
        }
        angle
    }

    /// Start angle of a segment in drawing coordinates (`atan2` space,
    /// where the top of the wheel sits at `-π/2`).
    #[must_use]
    pub fn segment_start_angle(self, index: usize) -> f64 {
        index as f64 * SEGMENT_ANGLE_STEP - FRAC_PI_2
    }

    /// End angle of a segment in drawing coordinates.
    #[must_use]
    pub fn segment_end_angle(self, index: usize) -> f64 {
        self.segment_start_angle(index + 1)
    }

    /// Angle bisecting a segment, in drawing coordinates. Used for label
    /// placement.
    #[must_use]
    pub fn segment_mid_angle(self, index: usize) -> f64 {
        self.segment_start_angle(index) + SEGMENT_ANGLE_STEP / 2.0
    }

    /// Point at a given drawing-space angle and distance from the center.
    #[must_use]
    pub fn point_at(self, angle: f64, distance: f64) -> (f64, f64) {
        (
            self.center_x + distance * angle.cos(),
            self.center_y + distance * angle.sin(),
        )
    }
}
