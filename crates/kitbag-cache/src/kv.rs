//! Key-value backend trait and the JSON wrapper over it.

use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};

/// A byte-oriented key-value backend.
///
/// Each `set` is a full overwrite of the key; backends never merge.
pub trait KvStore {
    /// Read the raw bytes under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Overwrite `key` with `value`.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }

    /// All keys currently present.
    fn keys(&self) -> Result<Vec<String>, CacheError>;
}

/// Type-safe cache over a [`KvStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
}

impl<S: KvStore> Cache<S> {
    /// Wrap a backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache, replacing whatever was there.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        tracing::trace!(key, bytes = bytes.len(), "cache set");
        self.store.set(key, &bytes)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        tracing::trace!(key, "cache delete");
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

    /// Borrow the backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwrap the backend.
    pub fn into_store(self) -> S {
        self.store
    }
}
