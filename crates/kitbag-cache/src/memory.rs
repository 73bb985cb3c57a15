//! In-process backend.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::{CacheError, KvStore};

/// Shared in-memory key-value map.
///
/// Clones are handles to the same map, the way every script on a page sees
/// the same local storage. Single-threaded by construction (`!Send`).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys present.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Check if no keys are present.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.entries.borrow().contains_key(key))
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        Ok(self.entries.borrow().keys().cloned().collect())
    }
}
