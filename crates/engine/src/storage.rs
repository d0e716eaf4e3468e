//! Key-value persistence collaborator used by the [`ExpenseLedger`].
//!
//! The ledger only needs "store a string under a key, read it back". Two
//! implementations are provided: [`FileStore`], one JSON file per key, and
//! [`MemoryStore`] for tests and throwaway sessions.
//!
//! [`ExpenseLedger`]: crate::ExpenseLedger
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::{EngineError, ResultEngine};

pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, `None` if nothing was written yet.
    fn get(&self, key: &str) -> ResultEngine<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> ResultEngine<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> ResultEngine<PathBuf> {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(EngineError::Storage(format!("invalid storage key: {key}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> ResultEngine<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> ResultEngine<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(path, value)?;
        Ok(())
    }
}

/// In-process store. Clones share the same backing map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `key` with `value`, e.g. to simulate data left by a previous session.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> ResultEngine<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| EngineError::Storage("memory store poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ResultEngine<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| EngineError::Storage("memory store poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("engine_store_{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn file_store_missing_key_reads_none() {
        let store = FileStore::new(scratch_dir());
        assert_eq!(store.get("expenses").unwrap(), None);
    }

    #[test]
    fn file_store_creates_dir_and_round_trips() {
        let dir = scratch_dir();
        let store = FileStore::new(&dir);
        store.set("expenses", "[]").unwrap();
        assert!(dir.join("expenses.json").exists());
        assert_eq!(store.get("expenses").unwrap().as_deref(), Some("[]"));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let store = FileStore::new(scratch_dir());
        assert!(store.get("../etc").is_err());
        assert!(store.set("", "x").is_err());
    }

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let view = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(view.get("k").unwrap().as_deref(), Some("v"));
    }
}
