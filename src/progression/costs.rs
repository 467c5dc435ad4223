//! Shard cost tables
//!
//! Fixed per-level shard costs for the main and skill tracks. These are
//! game-balance constants, not derived formulas, so they live here as
//! literal tables and the tests pin them down.

use serde::{Deserialize, Serialize};

/// Highest reachable main-track level (level 0 = unranked)
pub const MAIN_MAX_LEVEL: u8 = 15;
/// Lowest skill-track level; the first three levels come free
pub const SKILL_MIN_LEVEL: u8 = 3;
/// Highest reachable skill-track level
pub const SKILL_MAX_LEVEL: u8 = 18;

/// Which cost table to consult
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Main,
    Skill,
}

/// Named rank bands for the main track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MainTier {
    Vanguard,
    Ascendant,
    Eternal,
}

impl MainTier {
    pub fn name(&self) -> &'static str {
        match self {
            MainTier::Vanguard => "Vanguard",
            MainTier::Ascendant => "Ascendant",
            MainTier::Eternal => "Eternal",
        }
    }

    /// Tier for a main-track level, None for level 0 (unranked)
    pub fn for_level(level: u8) -> Option<MainTier> {
        match level {
            1..=5 => Some(MainTier::Vanguard),
            6..=10 => Some(MainTier::Ascendant),
            11..=15 => Some(MainTier::Eternal),
            _ => None,
        }
    }
}

/// One row of a cost table
#[derive(Debug, Clone, Copy)]
pub struct LevelCostEntry {
    pub level: u8,
    /// Shards to go from the previous level to this one
    pub incremental: u32,
    /// Shards spent in total to stand at this level
    pub cumulative: u32,
}

const fn row(level: u8, incremental: u32, cumulative: u32) -> LevelCostEntry {
    LevelCostEntry {
        level,
        incremental,
        cumulative,
    }
}

/// Main track, levels 1..=15
const MAIN_COSTS: [LevelCostEntry; 15] = [
    row(1, 5, 5),
    row(2, 5, 10),
    row(3, 5, 15),
    row(4, 5, 20),
    row(5, 10, 30),
    row(6, 10, 40),
    row(7, 10, 50),
    row(8, 10, 60),
    row(9, 10, 70),
    row(10, 20, 90),
    row(11, 20, 110),
    row(12, 20, 130),
    row(13, 30, 160),
    row(14, 30, 190),
    row(15, 40, 230),
];

/// Skill track, levels 3..=18 (level 3 is the free floor)
const SKILL_COSTS: [LevelCostEntry; 16] = [
    row(3, 0, 0),
    row(4, 5, 5),
    row(5, 5, 10),
    row(6, 5, 15),
    row(7, 10, 25),
    row(8, 10, 35),
    row(9, 10, 45),
    row(10, 15, 60),
    row(11, 15, 75),
    row(12, 15, 90),
    row(13, 20, 110),
    row(14, 20, 130),
    row(15, 20, 150),
    row(16, 30, 180),
    row(17, 30, 210),
    row(18, 40, 250),
];

/// Look up the table row for a level, None when out of range
pub fn entry(track: Track, level: u8) -> Option<&'static LevelCostEntry> {
    match track {
        Track::Main => {
            if (1..=MAIN_MAX_LEVEL).contains(&level) {
                Some(&MAIN_COSTS[(level - 1) as usize])
            } else {
                None
            }
        }
        Track::Skill => {
            if (SKILL_MIN_LEVEL..=SKILL_MAX_LEVEL).contains(&level) {
                Some(&SKILL_COSTS[(level - SKILL_MIN_LEVEL) as usize])
            } else {
                None
            }
        }
    }
}

/// Shards needed to reach `level` from the level below it
pub fn incremental_cost(track: Track, level: u8) -> Option<u32> {
    entry(track, level).map(|e| e.incremental)
}

/// Total shards spent to stand at `level`
///
/// Main level 0 (unranked) is a valid resting state and costs nothing.
pub fn cumulative_cost(track: Track, level: u8) -> Option<u32> {
    if track == Track::Main && level == 0 {
        return Some(0);
    }
    entry(track, level).map(|e| e.cumulative)
}

/// Display label for a main-track level
pub fn main_level_label(level: u8) -> String {
    match MainTier::for_level(level) {
        Some(tier) => format!("Lv.{} {}", level, tier.name()),
        None => "Unranked".to_string(),
    }
}

/// Display label for a skill-track level
pub fn skill_level_label(level: u8) -> String {
    format!("Lv.{}", level)
}
