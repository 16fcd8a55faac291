use std::collections::HashMap;

use parking_lot::RwLock;

use super::{KvStore, StorageError};

/// Volatile backend for tests and demos.
#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
