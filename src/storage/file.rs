use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::warn;

use super::{KvStore, StorageError};

const LOG_TARGET: &str = "mafia_night::storage::file";

/// Durable backend: one JSON object file mapping keys to string values,
/// rewritten on every set.
pub struct FileStore {
    path: PathBuf,
    cache: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, loading whatever the file holds. Missing
    /// or malformed files read as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(err) => {
                    warn!(
                        target: LOG_TARGET,
                        path = %path.display(),
                        %err,
                        "discarding malformed store file"
                    );
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self {
            path,
            cache: RwLock::new(cache),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, map: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let payload = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cache.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut cache = self.cache.write();
        cache.insert(key.to_string(), value.to_string());
        self.flush(&cache)
    }
}
