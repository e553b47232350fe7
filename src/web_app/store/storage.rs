// web_app/store/storage.rs - Key-value slot the product list is persisted to
//
// The browser build writes to window.localStorage; tests and the SSR
// shell use an in-memory map with the same semantics.

use std::collections::HashMap;

use crate::web_app::error::StoreResult;

/// A string key-value store with full-overwrite writes
pub trait StorageBackend {
    /// Read the value stored under `key`, `None` if the slot is empty
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the value stored under `key`
    fn write(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// In-memory storage, used by tests and during server-side rendering
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one slot, e.g. a blob left by an earlier session
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), value.into());
        Self { slots }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use browser::BrowserStorage;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod browser {
    use super::StorageBackend;
    use crate::web_app::error::{StoreError, StoreResult};

    /// window.localStorage
    ///
    /// Holds no handle so it can live inside a reactive signal; the storage
    /// object is looked up on every call. Without a window (server-side
    /// rendering) reads see an empty slot and writes fail.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserStorage;

    impl BrowserStorage {
        fn local_storage() -> StoreResult<web_sys::Storage> {
            let window = web_sys::window().ok_or(StoreError::Unavailable)?;
            window
                .local_storage()
                .map_err(|e| StoreError::Read(format!("{:?}", e)))?
                .ok_or(StoreError::Unavailable)
        }
    }

    impl StorageBackend for BrowserStorage {
        fn read(&self, key: &str) -> StoreResult<Option<String>> {
            let storage = match Self::local_storage() {
                Ok(storage) => storage,
                Err(StoreError::Unavailable) => return Ok(None),
                Err(e) => return Err(e),
            };
            storage
                .get_item(key)
                .map_err(|e| StoreError::Read(format!("{:?}", e)))
        }

        fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
            Self::local_storage()?
                .set_item(key, value)
                .map_err(|e| StoreError::Write(format!("{:?}", e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_empty_slot() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("cosmetics_products").unwrap(), None);
    }

    #[test]
    fn test_memory_storage_overwrites() {
        let mut storage = MemoryStorage::with_slot("k", "[1]");
        storage.write("k", "[2]").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("[2]"));
        assert_eq!(storage.get("k"), Some("[2]"));
    }
}
