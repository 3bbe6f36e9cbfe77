//! In-memory color store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ColorStore, StoreError};
use crate::color::Color;
use crate::session::ContextKey;

/// HashMap-backed store, used by tests and the simulation driver.
#[derive(Debug, Default)]
pub struct MemoryColorStore {
    records: RwLock<HashMap<ContextKey, Color>>,
}

impl MemoryColorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoized contexts.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ColorStore for MemoryColorStore {
    async fn get(&self, key: &ContextKey) -> Result<Option<Color>, StoreError> {
        Ok(self.records.read().await.get(key).copied())
    }

    async fn set(&self, key: &ContextKey, color: Color) -> Result<(), StoreError> {
        self.records.write().await.insert(key.clone(), color);
        Ok(())
    }

    async fn remove(&self, key: &ContextKey) -> Result<(), StoreError> {
        self.records.write().await.remove(key);
        Ok(())
    }
}
