// src/shared/backend/local_store.rs
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::warn;

use super::error::StoreError;

/// Durable key -> JSON array store backed by a single file.
///
/// Every mutation is a whole-file read-modify-write held under one lock, so
/// concurrent appends from the same process never lose entries. Values that
/// are missing, unparsable or not arrays read as empty lists.
#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LocalStore {
    pub const DEFAULT_PATH: &'static str = ".local_storage.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read_list(&self, key: &str) -> Result<Vec<Value>, StoreError> {
        let _guard = self.lock.lock().await;
        let map = self.load().await?;
        Ok(list_at(&map, key))
    }

    /// Append one entry to the list under `key` and return the new length.
    pub async fn append(&self, key: &str, entry: Value) -> Result<usize, StoreError> {
        let _guard = self.lock.lock().await;

        let mut map = self.load().await?;
        let mut list = list_at(&map, key);
        list.push(entry);
        let len = list.len();
        map.insert(key.to_string(), Value::Array(list));

        self.persist(&map).await?;
        Ok(len)
    }

    async fn load(&self) -> Result<Map<String, Value>, StoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(StoreError::LocalStorage(e.to_string())),
        };

        match serde_json::from_slice::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) | Err(_) => {
                warn!(
                    path = %self.path.display(),
                    "local storage file is not a JSON object, starting from empty"
                );
                Ok(Map::new())
            }
        }
    }

    async fn persist(&self, map: &Map<String, Value>) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(map)
            .map_err(|e| StoreError::LocalStorage(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::LocalStorage(e.to_string()))?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(|e| StoreError::LocalStorage(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::LocalStorage(e.to_string()))
    }
}

fn list_at(map: &Map<String, Value>, key: &str) -> Vec<Value> {
    match map.get(key) {
        Some(Value::Array(items)) => items.clone(),
        Some(_) => {
            warn!(key, "local storage key does not hold a list, treating as empty");
            Vec::new()
        }
        None => Vec::new(),
    }
}
