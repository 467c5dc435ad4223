//! Persistent key-value state store
//!
//! Each top-level state slice (levels, character assignments, budget
//! config) is serialized as JSON under its own key. Reads fall back to
//! defaults with a logged warning; a failed write never disturbs the
//! in-memory state.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Slice key: track levels
pub const KEY_LEVELS: &str = "levels";
/// Slice key: character assignments
pub const KEY_CHARACTERS: &str = "characters";
/// Slice key: budget configuration
pub const KEY_BUDGET: &str = "budget";

/// Store error types
#[derive(Debug, Clone)]
pub enum StoreError {
    IoError(String),
    SerializeError(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "IO error: {}", e),
            StoreError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// JSON-file-per-key store rooted in one directory
#[derive(Debug, Clone)]
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    /// Store in the platform data directory
    pub fn open_default() -> Self {
        use directories::ProjectDirs;

        let dir = if let Some(proj_dirs) = ProjectDirs::from("com", "shardplan", "Shardplan") {
            proj_dirs.data_local_dir().to_path_buf()
        } else {
            PathBuf::from(".")
        };
        Self { dir }
    }

    /// Store rooted at an explicit directory
    pub fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Load a slice, None when missing or unreadable
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.key_path(key);
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(value) => Some(value),
                Err(e) => {
                    log::warn!("Failed to parse slice '{}': {}, using default", key, e);
                    None
                }
            },
            Err(e) => {
                log::warn!("Failed to read slice '{}': {}, using default", key, e);
                None
            }
        }
    }

    /// Write a slice
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::IoError(e.to_string()))?;

        let json = serde_json::to_string_pretty(value)
            .map_err(|e| StoreError::SerializeError(e.to_string()))?;
        fs::write(self.key_path(key), json).map_err(|e| StoreError::IoError(e.to_string()))?;

        log::debug!("Slice '{}' saved", key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        a: u32,
        b: Option<String>,
    }

    fn temp_store(tag: &str) -> StateStore {
        let dir = std::env::temp_dir().join(format!("shardplan-store-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        StateStore::at(dir)
    }

    #[test]
    fn test_round_trip() {
        let store = temp_store("roundtrip");
        let value = Sample {
            a: 7,
            b: Some("x".to_string()),
        };
        store.save("sample", &value).unwrap();
        assert_eq!(store.load::<Sample>("sample"), Some(value));
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = temp_store("missing");
        assert_eq!(store.load::<Sample>("nothing"), None);
    }

    #[test]
    fn test_corrupt_slice_is_none() {
        let store = temp_store("corrupt");
        store.save("junk", &"not a sample").unwrap();
        assert_eq!(store.load::<Sample>("junk"), None);
    }
}
