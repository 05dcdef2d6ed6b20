use bubbles_core::{KeyValueStore, MemoryStore, StorageError};
use web_sys as web;

/// `localStorage` when the browser grants it, in-memory otherwise.
pub enum BrowserStore {
    Local(web::Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match local_storage() {
            Ok(storage) => BrowserStore::Local(storage),
            Err(e) => {
                log::warn!("[storage] {}; votes will not survive reload", e);
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

fn local_storage() -> Result<web::Storage, StorageError> {
    let window = web::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable("localStorage disabled".into())),
        Err(e) => Err(StorageError::Unavailable(format!("{:?}", e))),
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(s) => s.get_item(key).ok().flatten(),
            BrowserStore::Memory(m) => m.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            BrowserStore::Local(s) => {
                s.set_item(key, value)
                    .map_err(|e| StorageError::WriteRejected {
                        key: key.to_owned(),
                        reason: format!("{:?}", e),
                    })
            }
            BrowserStore::Memory(m) => m.set(key, value),
        }
    }
}
