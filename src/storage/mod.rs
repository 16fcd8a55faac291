pub mod file;
pub mod in_memory;

pub use file::FileStore;
pub use in_memory::InMemoryStore;

/// Key holding the serialized scenario list.
pub const SCENARIOS_KEY: &str = "scenarios";
/// Key holding the preferred language code.
pub const LANGUAGE_KEY: &str = "language";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable string key-value store. Reads treat anything unreadable as
/// absent; writes are best-effort and callers may drop the error.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
