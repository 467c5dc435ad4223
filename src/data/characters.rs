//! Character catalog
//!
//! The static roster a slot can be assigned from. Exactly one entry is
//! the independent variant: it levels for free, follows its own
//! multiplier formula, and sits outside the synergy system entirely.

use serde::{Deserialize, Serialize};

/// A character that can occupy a slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Stable identifier used by assignments and persistence
    pub id: String,
    /// Display name
    pub name: String,
    /// Single-character glyph for the slot icon
    pub icon: char,
    /// Accent color (r, g, b)
    pub color: (u8, u8, u8),
    /// Independent-variant flag
    #[serde(default)]
    pub independent: bool,
}

/// The full roster
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterCatalog {
    pub characters: Vec<Character>,
}

impl CharacterCatalog {
    /// Find a character by id
    pub fn find(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Whether an id refers to the independent variant
    pub fn is_independent(&self, id: &str) -> bool {
        self.find(id).map(|c| c.independent).unwrap_or(false)
    }
}

fn character(id: &str, name: &str, icon: char, color: (u8, u8, u8)) -> Character {
    Character {
        id: id.to_string(),
        name: name.to_string(),
        icon,
        color,
        independent: false,
    }
}

/// Built-in roster, used when no data file is present
pub fn default_characters() -> CharacterCatalog {
    let mut characters = vec![
        character("ashfang", "Ashfang", 'A', (220, 68, 5)),
        character("veyra", "Veyra", 'V', (96, 165, 250)),
        character("korrin", "Korrin", 'K', (245, 158, 11)),
        character("nyssa", "Nyssa", 'N', (167, 139, 250)),
        character("thale", "Thale", 'T', (52, 211, 153)),
        character("ossian", "Ossian", 'O', (148, 163, 184)),
        character("ilex", "Ilex", 'I', (244, 114, 182)),
    ];
    characters.push(Character {
        id: "drifter".to_string(),
        name: "Drifter".to_string(),
        icon: 'D',
        color: (214, 211, 209),
        independent: true,
    });
    CharacterCatalog { characters }
}
