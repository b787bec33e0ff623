//! Pure results derivation: comments, radar data, and suggestions.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{AREA_COUNT, Area, Level, LevelVector};

/// Shown when every area scores 6 or above.
pub const CONGRATULATION_MESSAGE: &str = "Congratulations! Every area is in good balance.";

/// Level at or below which an area is flagged for attention.
pub const ATTENTION_THRESHOLD: u8 = 5;

/// Qualitative judgement of one area's level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceComment {
    NeedsAttention,
    Moderate,
    GoodBalance,
}

impl BalanceComment {
    /// `<=5` needs attention, `6..=7` moderate, `>=8` good balance.
    #[must_use]
    pub fn for_level(level: Level) -> Self {
        match level.get() {
            0..=5 => BalanceComment::NeedsAttention,
            6..=7 => BalanceComment::Moderate,
            _ => BalanceComment::GoodBalance,
        }
    }
}

impl fmt::Display for BalanceComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BalanceComment::NeedsAttention => "needs attention",
            BalanceComment::Moderate => "moderate",
            BalanceComment::GoodBalance => "good balance",
        })
    }
}

/// One row of the tabular breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaRow {
    pub area: Area,
    pub level: Level,
    pub comment: BalanceComment,
}

/// One radar-chart sample, in canonical area order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub area: Area,
    pub level: Level,
}

/// Derived results view over a [`LevelVector`]. Pure data, recomputed on
/// demand; presentation layers consume it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub rows: [AreaRow; AREA_COUNT],
    pub radar: [RadarPoint; AREA_COUNT],
    pub suggestions: SmallVec<[String; AREA_COUNT]>,
}

impl Summary {
    #[must_use]
    pub fn from_levels(levels: &LevelVector) -> Self {
        let mut rows = [AreaRow {
            area: Area::Health,
            level: Level::MIN,
            comment: BalanceComment::NeedsAttention,
        }; AREA_COUNT];
        let mut radar = [RadarPoint {
            area: Area::Health,
            level: Level::MIN,
        }; AREA_COUNT];

        for (slot, (area, level)) in rows.iter_mut().zip(levels.iter()) {
            *slot = AreaRow {
                area,
                level,
                comment: BalanceComment::for_level(level),
            };
        }
        for (slot, (area, level)) in radar.iter_mut().zip(levels.iter()) {
            *slot = RadarPoint { area, level };
        }

        Self {
            rows,
            radar,
            suggestions: suggestions(levels),
        }
    }

    /// Whether every area cleared the attention threshold.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.level.get() > ATTENTION_THRESHOLD)
    }
}

/// Advisory lines for every area at or below the attention threshold, in
/// area order. When none qualifies, a single congratulatory line.
#[must_use]
pub fn suggestions(levels: &LevelVector) -> SmallVec<[String; AREA_COUNT]> {
    let mut out: SmallVec<[String; AREA_COUNT]> = levels
        .iter()
        .filter(|(_, level)| level.get() <= ATTENTION_THRESHOLD)
        .map(|(area, _)| format!("{}: {}", area.label(), area.advice()))
        .collect();

    if out.is_empty() {
        out.push(CONGRATULATION_MESSAGE.to_owned());
    }
    out
}
