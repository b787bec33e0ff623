use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Number of life areas on the wheel. Fixed at startup, never resized.
pub const AREA_COUNT: usize = 8;

/// One of the eight fixed life areas, in canonical wheel order.
///
/// Index 0 (`Health`) starts at the top of the wheel; indices advance
/// clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    Health,
    Family,
    Friends,
    Finances,
    Work,
    Leisure,
    Growth,
    Spirituality,
}

impl Area {
    /// All areas in canonical wheel order.
    pub const ALL: [Area; AREA_COUNT] = [
        Area::Health,
        Area::Family,
        Area::Friends,
        Area::Finances,
        Area::Work,
        Area::Leisure,
        Area::Growth,
        Area::Spirituality,
    ];

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Area::Health => "Health",
            Area::Family => "Family",
            Area::Friends => "Friends",
            Area::Finances => "Finances",
            Area::Work => "Work",
            Area::Leisure => "Leisure",
            Area::Growth => "Growth",
            Area::Spirituality => "Spirituality",
        }
    }

    /// Fixed display color of this area's wedge.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Area::Health => Color::from_rgb8(0x89, 0xCF, 0xF0),
            Area::Family => Color::from_rgb8(0xA5, 0xD8, 0xE6),
            Area::Friends => Color::from_rgb8(0xF8, 0xC8, 0xDC),
            Area::Finances => Color::from_rgb8(0xB5, 0xEA, 0xD7),
            Area::Work => Color::from_rgb8(0xFF, 0xDA, 0xC1),
            Area::Leisure => Color::from_rgb8(0xC5, 0xDC, 0xA0),
            Area::Growth => Color::from_rgb8(0xF2, 0xCF, 0xC5),
            Area::Spirituality => Color::from_rgb8(0xD3, 0xC0, 0xEB),
        }
    }

    /// Static advisory shown when this area scores 5 or below.
    #[must_use]
    pub fn advice(self) -> &'static str {
        match self {
            Area::Health => "Consider adding regular exercise and a balanced diet",
            Area::Family => "Spend more quality time with your loved ones",
            Area::Friends => "Strengthen your social bonds and cultivate new friendships",
            Area::Finances => "Review your budget and look into saving and investment options",
            Area::Work => "Evaluate your job satisfaction and growth opportunities",
            Area::Leisure => "Make room for more recreational activities and hobbies",
            Area::Growth => "Invest in your personal and professional development",
            Area::Spirituality => "Set aside time for reflection and practices that nourish you",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
