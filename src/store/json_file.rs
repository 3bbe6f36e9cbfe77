//! JSON-file color store

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{ColorStore, StoreError};
use crate::color::Color;
use crate::session::ContextKey;

/// Color store persisted as a single JSON object file.
///
/// This is the durable analog of the in-memory store: one flat mapping of
/// context key to hex color. Writes go through a temp file and rename so a
/// crash mid-write never corrupts the file; in-process writers are serialized
/// by a lock.
#[derive(Debug)]
pub struct JsonFileColorStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileColorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> Result<HashMap<ContextKey, Color>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_records(&self, records: &HashMap<ContextKey, Color>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[async_trait]
impl ColorStore for JsonFileColorStore {
    async fn get(&self, key: &ContextKey) -> Result<Option<Color>, StoreError> {
        Ok(self.read_records()?.get(key).copied())
    }

    async fn set(&self, key: &ContextKey, color: Color) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read_records()?;
        records.insert(key.clone(), color);
        self.write_records(&records)
    }

    async fn remove(&self, key: &ContextKey) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read_records()?;
        if records.remove(key).is_some() {
            self.write_records(&records)?;
        }
        Ok(())
    }
}
