//! Durable key-value storage seam.
//!
//! The browser front end backs this with `localStorage`; tests and hosts
//! without storage use [`MemoryStore`].

use fnv::FnvHashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("write rejected for key `{key}`: {reason}")]
    WriteRejected { key: String, reason: String },
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FnvHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
