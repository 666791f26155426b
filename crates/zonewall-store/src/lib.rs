//! Zonewall — JSON-file state store.
//!
//! Persists the whole key/value state as one JSON object on disk, the
//! service-side stand-in for the browser storage the clock state
//! originally lived in. A missing file is an empty map.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use zonewall_core::error::DomainError;
use zonewall_core::store::StateStore;

/// File-backed state store. All operations serialize through one lock,
/// so a write is always a consistent read-modify-write of the file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Creates a store over `path`. The file is created lazily on the
    /// first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn read_map(path: &Path) -> Result<Map<String, Value>, DomainError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Map::new());
            }
            Err(error) => {
                return Err(DomainError::Infrastructure(format!(
                    "state file read failed: {error}"
                )));
            }
        };

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) | Err(_) => {
                // A damaged state file starts the service over rather
                // than wedging it.
                tracing::warn!(path = %path.display(), "corrupt state file, starting empty");
                Ok(Map::new())
            }
        }
    }

    async fn write_map(path: &Path, map: &Map<String, Value>) -> Result<(), DomainError> {
        let bytes = serde_json::to_vec_pretty(&Value::Object(map.clone()))
            .map_err(|e| DomainError::Infrastructure(format!("state serialization failed: {e}")))?;
        tokio::fs::write(path, bytes)
            .await
            .map_err(|e| DomainError::Infrastructure(format!("state file write failed: {e}")))
    }
}

#[async_trait]
impl StateStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, DomainError> {
        let _guard = self.lock.lock().await;
        let map = Self::read_map(&self.path).await?;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;
        let mut map = Self::read_map(&self.path).await?;
        map.insert(key.to_owned(), value);
        Self::write_map(&self.path, &map).await
    }
}
