//! Progression rules
//!
//! Cost tables, multiplier formulas, and effective-level bonus rules
//! for the main and skill upgrade tracks.

pub mod bonus;
pub mod costs;
pub mod multiplier;

pub use bonus::{compute_bonuses, synergy_band, SkillSlotView, SlotBonuses};
pub use bonus::{ETERNAL_MILESTONE, SYNERGY_UNLOCK};
pub use costs::{
    cumulative_cost, incremental_cost, main_level_label, skill_level_label, LevelCostEntry,
    MainTier, Track, MAIN_MAX_LEVEL, SKILL_MAX_LEVEL, SKILL_MIN_LEVEL,
};
pub use multiplier::{main_multiplier, skill_multiplier, variant_multiplier};
