//! Shardplan - a terminal shard-allocation planner
//!
//! Plan the main battle track and three stunt skill tracks, assign
//! characters, track a free or bounded shard budget, and read off the
//! combined damage multiplier with milestone and synergy bonuses.

pub mod data;
pub mod export;
pub mod progression;
pub mod save;
pub mod session;
pub mod ui;

// Re-export commonly used types
pub use data::{Character, CharacterCatalog, DataManager};
pub use session::{BudgetMode, Outcome, Planner, Slot, Summary};
