//! Planning session
//!
//! The owning state struct, its bounded transitions, and the budget
//! tracker that gates them.

pub mod budget;
pub mod state;

pub use budget::{BudgetConfig, BudgetMode, BudgetReport};
pub use state::{
    MainSummary, Outcome, Planner, PlannerState, Refusal, SkillState, SkillSummary, Slot,
    SlotControl, Summary, SKILL_SLOTS,
};
