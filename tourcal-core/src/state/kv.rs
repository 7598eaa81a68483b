//! Key-value persistence behind session state.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{TourCalError, TourCalResult};

/// Minimal string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> TourCalResult<()>;

    fn remove(&mut self, key: &str) -> TourCalResult<()>;

    fn clear(&mut self) -> TourCalResult<()>;
}

/// Process-local store; contents vanish with the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> TourCalResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> TourCalResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> TourCalResult<()> {
        self.entries.clear();
        Ok(())
    }
}

/// Store backed by a JSON object on disk, rewritten on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`; a missing file is an empty store.
    pub fn open(path: &Path) -> TourCalResult<Self> {
        let entries = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).map_err(|e| {
                    TourCalError::State(format!("Could not read {}: {e}", path.display()))
                })?
            }
        } else {
            BTreeMap::new()
        };

        Ok(FileStore {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Like [`FileStore::open`], but an unreadable file starts over empty.
    ///
    /// The bad file is left in place until the next write replaces it.
    /// I/O errors still propagate.
    pub fn open_or_reset(path: &Path) -> TourCalResult<Self> {
        match Self::open(path) {
            Err(TourCalError::State(reason)) => {
                warn!(%reason, "discarding unreadable session state");
                Ok(FileStore {
                    path: path.to_path_buf(),
                    entries: BTreeMap::new(),
                })
            }
            other => other,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> TourCalResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> TourCalResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> TourCalResult<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn clear(&mut self) -> TourCalResult<()> {
        self.entries.clear();
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_basics() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("language"), None);

        store.set("language", "tr").unwrap();
        assert_eq!(store.get("language").as_deref(), Some("tr"));

        store.remove("language").unwrap();
        assert_eq!(store.get("language"), None);
    }

    #[test]
    fn file_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/state.json");

        {
            let mut store = FileStore::open(&path).unwrap();
            store.set("language", "tr").unwrap();
            store.set("admin_authenticated", "true").unwrap();
        }

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("language").as_deref(), Some("tr"));
        assert_eq!(store.get("admin_authenticated").as_deref(), Some("true"));

        store.clear().unwrap();
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("language"), None);
    }

    #[test]
    fn corrupt_file_is_a_state_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, TourCalError::State(_)));
    }

    #[test]
    fn corrupt_file_reopens_empty_and_is_replaced_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{\"language\": ").unwrap();

        let mut store = FileStore::open_or_reset(&path).unwrap();
        assert_eq!(store.get("language"), None);

        store.clear().unwrap();
        assert!(FileStore::open(&path).is_ok());
    }

    #[test]
    fn open_or_reset_keeps_readable_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, r#"{"language": "tr"}"#).unwrap();

        let store = FileStore::open_or_reset(&path).unwrap();
        assert_eq!(store.get("language").as_deref(), Some("tr"));
    }
}
