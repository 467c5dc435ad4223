//! Shard budget tracking
//!
//! Free mode mirrors the pool to whatever is consumed, so nothing is
//! ever unaffordable. Bounded mode caps the pool at a user-supplied
//! value and gates each level-up on the remaining balance.

use serde::{Deserialize, Serialize};

/// Budget tracking modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BudgetMode {
    /// Pool is derived from consumption; every raise up to the cap is allowed
    #[default]
    Free,
    /// Pool is user-capped; raises must be affordable
    Bounded,
}

impl BudgetMode {
    pub fn name(&self) -> &'static str {
        match self {
            BudgetMode::Free => "Free",
            BudgetMode::Bounded => "Bounded",
        }
    }
}

/// Persisted budget configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetConfig {
    pub mode: BudgetMode,
    /// Total shard pool; derived and read-only in free mode
    pub pool: u32,
}

impl BudgetConfig {
    /// Whether an increment costing `next_cost` is allowed at `remaining`
    pub fn allows_increment(&self, remaining: i64, next_cost: u32) -> bool {
        match self.mode {
            BudgetMode::Free => true,
            BudgetMode::Bounded => remaining >= i64::from(next_cost),
        }
    }
}

/// Derived consumption report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetReport {
    pub pool: u32,
    pub consumed_main: u32,
    pub consumed_skill: u32,
    /// Signed: bounded mode can dip below zero, which is a warning
    /// condition shown to the user, not an error
    pub remaining: i64,
}

impl BudgetReport {
    pub fn new(config: BudgetConfig, consumed_main: u32, consumed_skill: u32) -> Self {
        let remaining =
            i64::from(config.pool) - i64::from(consumed_main) - i64::from(consumed_skill);
        Self {
            pool: config.pool,
            consumed_main,
            consumed_skill,
            remaining,
        }
    }

    pub fn consumed(&self) -> u32 {
        self.consumed_main + self.consumed_skill
    }

    pub fn overspent(&self) -> bool {
        self.remaining < 0
    }
}
