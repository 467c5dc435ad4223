//! Damage multiplier formulas
//!
//! Converts a level (or bonus-adjusted effective level) into its
//! percentage contribution. The main track is a step function with
//! hard plateau boundaries; the skill tracks are linear. Totals can
//! exceed 100%-scale nominal ranges by design.

/// Standard skill percentage at effective level 1
pub const SKILL_BASE: u32 = 85;
/// Standard skill percentage gained per effective level
pub const SKILL_STEP: u32 = 5;
/// Independent-variant percentage at effective level 1
pub const VARIANT_BASE: u32 = 90;
/// Independent-variant percentage gained per effective level
pub const VARIANT_STEP: u32 = 8;

/// Main-track multiplier percentage
///
/// Plateau boundaries are game-balance constants: 1-5, 6-9, 10 alone,
/// 11-12, 13-15. Level 0 (unranked) contributes nothing.
pub fn main_multiplier(level: u8) -> u32 {
    match level {
        0 => 0,
        1..=5 => 400,
        6..=9 => 520,
        10 => 640,
        11..=12 => 700,
        _ => 760,
    }
}

/// Standard skill multiplier for an effective level
pub fn skill_multiplier(effective_level: i32) -> u32 {
    if effective_level <= 0 {
        return 0;
    }
    SKILL_BASE + (effective_level as u32 - 1) * SKILL_STEP
}

/// Independent-variant skill multiplier for an effective level
pub fn variant_multiplier(effective_level: i32) -> u32 {
    if effective_level <= 0 {
        return 0;
    }
    VARIANT_BASE + (effective_level as u32 - 1) * VARIANT_STEP
}
