use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Durable key-value storage scoped to one client, shaped like browser
/// local storage: get/set/remove by string key.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend, mostly for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries =
            self.entries.lock().map_err(|_| StorageError::Backend("lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries =
            self.entries.lock().map_err(|_| StorageError::Backend("lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries =
            self.entries.lock().map_err(|_| StorageError::Backend("lock poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// One file per key under a directory, so state survives restarts the way
/// browser storage survives reloads.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are internal (`enrollment_draft_{id}` etc.); anything outside
        // a conservative charset is escaped to keep the filename safe.
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(safe)
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Best-effort JSON load. Storage and parse failures degrade to `None` with
/// a warning; local state is never worth failing a session over.
pub fn load_json<T: serde::de::DeserializeOwned>(
    storage: &dyn KeyValueStorage,
    key: &str,
) -> Option<T> {
    match storage.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "Discarding unparseable client state");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            tracing::warn!(key, error = %err, "Failed to read client state");
            None
        }
    }
}

/// Best-effort JSON save, logging instead of propagating.
pub fn save_json<T: serde::Serialize>(storage: &dyn KeyValueStorage, key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(key, error = %err, "Failed to serialize client state");
            return;
        }
    };
    if let Err(err) = storage.set(key, &raw) {
        tracing::warn!(key, error = %err, "Failed to write client state");
    }
}

pub fn remove_key(storage: &dyn KeyValueStorage, key: &str) {
    if let Err(err) = storage.remove(key) {
        tracing::warn!(key, error = %err, "Failed to remove client state");
    }
}
