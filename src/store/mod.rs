//! Per-context persistence of extracted colors

mod json_file;
mod memory;

pub use json_file::JsonFileColorStore;
pub use memory::MemoryColorStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::color::Color;
use crate::session::ContextKey;

/// Errors from a color store backend.
///
/// Callers in the overlay engine treat every variant as a soft failure: a
/// failed `get` reads as absent, a failed `set` is a dropped write.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Asynchronous key-value persistence of the last extracted color per
/// navigation context.
///
/// Read-after-write consistency is only required within one process. `remove`
/// is the context-teardown hook that keeps storage from growing without bound
/// as lineages come and go.
#[async_trait]
pub trait ColorStore: Send + Sync {
    /// The memoized color for a context, if any.
    async fn get(&self, key: &ContextKey) -> Result<Option<Color>, StoreError>;

    /// Overwrite the memoized color for a context.
    async fn set(&self, key: &ContextKey, color: Color) -> Result<(), StoreError>;

    /// Drop the record for a closing context.
    async fn remove(&self, key: &ContextKey) -> Result<(), StoreError>;
}
