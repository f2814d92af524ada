//! Client-local key/value storage
//!
//! The recent-recipes ledger persists through a [`LocalStore`]. Production
//! uses [`SqliteStore`]; [`MemoryStore`] backs tests and serves as a fallback
//! when the database cannot be opened.

pub mod sqlite;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use crate::error::StorageError;

pub use sqlite::SqliteStore;

type Result<T> = std::result::Result<T, StorageError>;

/// String key/value store, one value per namespaced key.
pub trait LocalStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Volatile store living for the life of the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// Open the on-disk store, falling back to memory if it is unavailable.
///
/// `data_dir` overrides the default location.
pub fn open_store(data_dir: Option<&Path>) -> Box<dyn LocalStore> {
    let opened = match data_dir {
        Some(dir) => SqliteStore::open_at(dir),
        None => SqliteStore::open(),
    };

    match opened {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("Local storage unavailable, recent recipes won't persist: {}", e);
            Box::new(MemoryStore::new())
        }
    }
}
