//! Persistence
//!
//! JSON key-value storage for the planner's state slices.

pub mod store;

pub use store::{StateStore, StoreError, KEY_BUDGET, KEY_CHARACTERS, KEY_LEVELS};
