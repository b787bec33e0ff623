use serde::{Deserialize, Serialize};

use crate::core::area::{AREA_COUNT, Area};
use crate::error::{WheelError, WheelResult};

/// Satisfaction rating for one area, always in `[1, 10]` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(1);
    pub const MAX: Level = Level(10);

    pub fn new(value: i32) -> WheelResult<Self> {
        if !(1..=10).contains(&value) {
            return Err(WheelError::InvalidLevel { value });
        }
        Ok(Self(value as u8))
    }

    /// Builds a level by clamping into `[1, 10]`.
    ///
    /// Used by the input mapper, where the radial calculation can land
    /// outside the band (a click at the exact center computes 0).
    #[must_use]
    pub fn from_clamped(value: i32) -> Self {
        Self(value.clamp(1, 10) as u8)
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Fraction of the full wheel radius this level fills.
    #[must_use]
    pub fn radial_fraction(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl TryFrom<i32> for Level {
    type Error = WheelError;

    fn try_from(value: i32) -> WheelResult<Self> {
        Self::new(value)
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        i32::from(level.0)
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::MIN
    }
}

/// Ordered satisfaction levels for all eight areas, indexed by [`Area`].
///
/// Always exactly [`AREA_COUNT`] entries; every entry is in `[1, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelVector {
    levels: [Level; AREA_COUNT],
}

impl LevelVector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: [i32; AREA_COUNT]) -> WheelResult<Self> {
        let mut levels = [Level::MIN; AREA_COUNT];
        for (slot, value) in levels.iter_mut().zip(values) {
            *slot = Level::new(value)?;
        }
        Ok(Self { levels })
    }

    #[must_use]
    pub fn get(&self, area: Area) -> Level {
        self.levels[area.index()]
    }

    pub fn set(&mut self, area: Area, level: Level) {
        self.levels[area.index()] = level;
    }

    /// Levels in canonical area order.
    #[must_use]
    pub fn as_array(&self) -> [Level; AREA_COUNT] {
        self.levels
    }

    pub fn iter(&self) -> impl Iterator<Item = (Area, Level)> + '_ {
        Area::ALL.iter().copied().zip(self.levels.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_rejects_out_of_band_values() {
        assert!(Level::new(0).is_err());
        assert!(Level::new(11).is_err());
        assert!(Level::new(1).is_ok());
        assert!(Level::new(10).is_ok());
    }

    #[test]
    fn clamped_constructor_saturates() {
        assert_eq!(Level::from_clamped(0).get(), 1);
        assert_eq!(Level::from_clamped(-3).get(), 1);
        assert_eq!(Level::from_clamped(15).get(), 10);
        assert_eq!(Level::from_clamped(7).get(), 7);
    }

    #[test]
    fn default_vector_is_all_ones() {
        let levels = LevelVector::new();
        assert!(levels.iter().all(|(_, level)| level == Level::MIN));
    }

    #[test]
    fn set_updates_only_the_target_area() {
        let mut levels = LevelVector::new();
        levels.set(Area::Work, Level::new(8).expect("valid level"));

        assert_eq!(levels.get(Area::Work).get(), 8);
        for (area, level) in levels.iter() {
            if area != Area::Work {
                assert_eq!(level, Level::MIN);
            }
        }
    }
}
