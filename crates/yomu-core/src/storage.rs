use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::StorageError;

/// Key-value persistence used by the history and settings stores
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Last successfully written value, `None` if the key was never written
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Replace the value under `key` wholesale
    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;
}

/// Process-local store, nothing survives a restart
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        self.values.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

/// One `<key>.json` file per key under a data directory
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() || key.starts_with('.') || key.contains(['/', '\\']) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let path = self.path_for(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Atomic write: write to .tmp then rename.
    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let bytes = serde_json::to_vec_pretty(&value)?;

        tokio::fs::create_dir_all(&self.dir).await?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &path).await?;

        tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_memory_store_absent_then_set() {
        let store = MemoryStore::new();
        assert!(store.get("history").await.unwrap().is_none());

        store.set("history", json!([1, 2])).await.unwrap();
        store.set("history", json!([3])).await.unwrap();
        assert_eq!(store.get("history").await.unwrap(), Some(json!([3])));
    }

    #[tokio::test]
    async fn test_file_store_roundtrip_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("nested");

        let store = JsonFileStore::new(&data_dir);
        assert!(store.get("settings").await.unwrap().is_none());
        store
            .set("settings", json!({"autoHide": false}))
            .await
            .unwrap();

        let reopened = JsonFileStore::new(&data_dir);
        assert_eq!(
            reopened.get("settings").await.unwrap(),
            Some(json!({"autoHide": false}))
        );
        assert!(data_dir.join("settings.json").exists());
        assert!(!data_dir.join("settings.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_file_store_rejects_path_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        for key in ["", "../escape", "a/b", ".hidden"] {
            let err = store.set(key, json!(null)).await.unwrap_err();
            assert!(matches!(err, StorageError::InvalidKey(_)), "key {key:?}");
        }
    }

    #[tokio::test]
    async fn test_file_store_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("history.json"), b"{not json").unwrap();

        let store = JsonFileStore::new(dir.path());
        let err = store.get("history").await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }
}
