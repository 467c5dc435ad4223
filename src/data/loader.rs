//! RON data loader
//!
//! Loads the character roster from an external RON file, with fallback
//! to the built-in defaults.

use std::fs;
use std::path::Path;

use super::characters::{default_characters, CharacterCatalog};

/// Manages external data
#[derive(Debug, Clone)]
pub struct DataManager {
    /// Character roster
    pub characters: CharacterCatalog,
}

impl DataManager {
    /// Create a new DataManager, loading from files or using defaults
    pub fn new() -> Self {
        Self::load_from_assets(Path::new("assets/data"))
    }

    /// Load data from a base directory, falling back per file
    pub fn load_from_assets(base_path: &Path) -> Self {
        Self {
            characters: Self::load_characters(base_path),
        }
    }

    /// Load the character roster from a RON file
    fn load_characters(base_path: &Path) -> CharacterCatalog {
        let path = base_path.join("characters.ron");
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match ron::from_str::<CharacterCatalog>(&content) {
                    Ok(catalog) => return catalog,
                    Err(e) => log::warn!("Failed to parse characters.ron: {}", e),
                },
                Err(e) => log::warn!("Failed to read characters.ron: {}", e),
            }
        }
        default_characters()
    }
}

impl Default for DataManager {
    fn default() -> Self {
        Self {
            characters: default_characters(),
        }
    }
}
