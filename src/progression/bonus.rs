//! Effective-level bonus rules
//!
//! Two additive bonuses feed a skill slot's effective level: the
//! "eternal" milestone bonus when the main track sits at its exact
//! milestone, and the pairwise synergy bonus where higher-leveled
//! siblings uplift weaker ones (with a mutual-buff exception at the
//! shared cap). Both rules read base levels only; effective levels
//! exist purely for the multiplier.

use super::costs::{MAIN_MAX_LEVEL, SKILL_MAX_LEVEL};

/// Main level that triggers the eternal bonus (exact match, not >=)
pub const ETERNAL_MILESTONE: u8 = MAIN_MAX_LEVEL;
/// Main level at which synergy bonuses unlock
pub const SYNERGY_UNLOCK: u8 = 8;

/// A skill slot as the bonus rules see it
#[derive(Debug, Clone, Copy)]
pub struct SkillSlotView {
    /// Stored base level
    pub level: u8,
    /// Independent-variant slots neither grant nor receive bonuses
    pub independent: bool,
}

/// Bonuses computed for one skill slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotBonuses {
    pub eternal: bool,
    pub synergy: u8,
}

impl SlotBonuses {
    /// Total additive effective-level bonus
    pub fn total(&self) -> u8 {
        self.synergy + u8::from(self.eternal)
    }
}

/// Potential synergy bonus a provider of this level could grant
///
/// Highest band wins: 18 -> 3, 15 -> 2, 12 -> 1, below 12 nothing.
pub fn synergy_band(provider_level: u8) -> u8 {
    if provider_level >= 18 {
        3
    } else if provider_level >= 15 {
        2
    } else if provider_level >= 12 {
        1
    } else {
        0
    }
}

/// Compute both bonuses for all three skill slots
pub fn compute_bonuses(main_level: u8, slots: &[SkillSlotView; 3]) -> [SlotBonuses; 3] {
    let eternal_active = main_level == ETERNAL_MILESTONE;
    let synergy_unlocked = main_level >= SYNERGY_UNLOCK;

    let mut out = [SlotBonuses::default(); 3];
    for (i, receiver) in slots.iter().enumerate() {
        if receiver.independent {
            continue;
        }
        out[i].eternal = eternal_active;

        if !synergy_unlocked {
            continue;
        }
        let mut best = 0;
        for (j, provider) in slots.iter().enumerate() {
            if j == i || provider.independent {
                continue;
            }
            let eligible = provider.level > receiver.level
                || (provider.level == SKILL_MAX_LEVEL && receiver.level == SKILL_MAX_LEVEL);
            if !eligible {
                continue;
            }
            best = best.max(synergy_band(provider.level));
        }
        out[i].synergy = best;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard(level: u8) -> SkillSlotView {
        SkillSlotView {
            level,
            independent: false,
        }
    }

    fn variant(level: u8) -> SkillSlotView {
        SkillSlotView {
            level,
            independent: true,
        }
    }

    #[test]
    fn test_eternal_exact_milestone_only() {
        let slots = [standard(10), standard(10), standard(10)];
        for main in [0u8, 8, 14] {
            let b = compute_bonuses(main, &slots);
            assert!(!b[0].eternal, "main {}", main);
        }
        let b = compute_bonuses(15, &slots);
        assert!(b.iter().all(|s| s.eternal));
    }

    #[test]
    fn test_eternal_skips_independent() {
        let b = compute_bonuses(15, &[standard(10), variant(10), standard(10)]);
        assert!(b[0].eternal);
        assert!(!b[1].eternal);
        assert!(b[2].eternal);
    }

    #[test]
    fn test_synergy_locked_below_main_8() {
        let b = compute_bonuses(7, &[standard(3), standard(18), standard(18)]);
        assert_eq!(b[0].synergy, 0);
    }

    #[test]
    fn test_synergy_bands() {
        assert_eq!(synergy_band(11), 0);
        assert_eq!(synergy_band(12), 1);
        assert_eq!(synergy_band(14), 1);
        assert_eq!(synergy_band(15), 2);
        assert_eq!(synergy_band(17), 2);
        assert_eq!(synergy_band(18), 3);
    }

    #[test]
    fn test_synergy_receiver_cases() {
        // Provider 18 uplifts a level-15 receiver
        let b = compute_bonuses(10, &[standard(15), standard(18), standard(3)]);
        assert_eq!(b[0].synergy, 3);
        // Both at the cap buff each other
        let b = compute_bonuses(10, &[standard(18), standard(18), standard(3)]);
        assert_eq!(b[0].synergy, 3);
        assert_eq!(b[1].synergy, 3);
        // Equal but below the cap: no strictly-greater provider
        let b = compute_bonuses(10, &[standard(16), standard(16), standard(3)]);
        assert_eq!(b[0].synergy, 0);
        assert_eq!(b[1].synergy, 0);
    }

    #[test]
    fn test_synergy_takes_max_not_sum() {
        let b = compute_bonuses(10, &[standard(3), standard(12), standard(18)]);
        assert_eq!(b[0].synergy, 3);
        // Provider at 18 also uplifts the level-12 slot; bonuses do not stack
        assert_eq!(b[1].synergy, 3);
        assert_eq!(b[2].synergy, 0);
    }

    #[test]
    fn test_independent_excluded_both_directions() {
        // Independent provider grants nothing
        let b = compute_bonuses(10, &[standard(3), variant(18), standard(3)]);
        assert_eq!(b[0].synergy, 0);
        // Independent receiver gets nothing even with an eligible sibling
        let b = compute_bonuses(10, &[variant(3), standard(18), standard(3)]);
        assert_eq!(b[0].synergy, 0);
        assert_eq!(b[0].total(), 0);
    }
}
