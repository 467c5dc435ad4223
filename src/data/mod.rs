//! Data loading and external content
//!
//! Loads the character roster from external RON files, allowing for
//! data-driven content and easy rebalancing.

pub mod characters;
pub mod loader;

pub use characters::{default_characters, Character, CharacterCatalog};
pub use loader::DataManager;
