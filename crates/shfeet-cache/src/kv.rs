//! Typed wrapper with automatic JSON serialization.

use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};

use crate::store::{FileStore, MemoryStore, Store};
use crate::CacheError;

/// Type-safe cache over any [`Store`].
///
/// Values are stored as JSON, so anything implementing `Serialize` and
/// `DeserializeOwned` can be persisted.
pub struct Cache {
    store: Box<dyn Store>,
}

impl Cache {
    /// Wrap an existing store.
    pub fn new(store: impl Store + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Cache backed by an in-process [`MemoryStore`].
    pub fn memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Cache backed by a [`FileStore`] rooted at `dir`.
    ///
    /// ```rust,ignore
    /// let cache = Cache::open_dir("~/.local/share/shfeet")?;
    /// ```
    pub fn open_dir(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        Ok(Self::new(FileStore::open(dir)?))
    }

    /// Open Spin's default Key-Value store.
    #[cfg(target_arch = "wasm32")]
    pub fn open_default() -> Result<Self, CacheError> {
        Ok(Self::new(crate::store::SpinStore::open_default()?))
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist. A stored value that does not
    /// decode as `T` is reported as [`CacheError::SerializeError`].
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache, replacing whatever was there.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, &bytes)?;
        tracing::trace!(key, bytes = bytes.len(), "cache write");
        Ok(())
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.keys()
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::memory()
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache").finish_non_exhaustive()
    }
}
