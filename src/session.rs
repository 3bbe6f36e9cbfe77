//! Navigation-context identity and its ephemeral caching

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Identifier scoping color memoization to one navigation lineage.
///
/// A lineage is one browsing context across its reloads: the first navigation
/// derives a key, every later navigation in the same context reuses it via the
/// context-local [`EphemeralSlot`]. Keys are never reused across unrelated
/// lineages; the derived form is `<prefix>_<unix-millis>_<random suffix>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextKey(String);

impl ContextKey {
    /// Default key prefix, matching the store's key namespace.
    pub const DEFAULT_PREFIX: &'static str = "fl_ctx";

    /// Derive a fresh key for a new lineage.
    pub fn derive(prefix: &str) -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        Self(format!("{}_{}_{}", prefix, millis, random_suffix()))
    }

    /// Fetch the lineage key from the context-local slot, deriving and caching
    /// a fresh one on first use.
    pub fn acquire(slot: &dyn EphemeralSlot, prefix: &str) -> Self {
        if let Some(existing) = slot.get() {
            return Self(existing);
        }
        let key = Self::derive(prefix);
        slot.put(&key.0);
        debug!(key = %key.0, "derived new context key");
        key
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContextKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContextKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Nine characters of base36, seeded from the OS entropy source.
fn random_suffix() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut bytes = [0u8; 9];
    // Entropy failure here would mean a broken OS RNG; fall back to a
    // timestamp-derived suffix rather than panicking in the engine.
    if getrandom::getrandom(&mut bytes).is_err() {
        return format!("{:09x}", chrono::Utc::now().timestamp_subsec_nanos());
    }
    bytes
        .iter()
        .map(|b| ALPHABET[(*b as usize) % ALPHABET.len()] as char)
        .collect()
}

/// Context-local storage surviving reloads but not context termination.
///
/// The browser analog is `sessionStorage`; the simulation driver holds one
/// in-memory slot per simulated tab.
pub trait EphemeralSlot {
    fn get(&self) -> Option<String>;
    fn put(&self, value: &str);
}

/// In-memory slot for tests and the simulation driver.
#[derive(Debug, Default)]
pub struct MemoryEphemeralSlot {
    value: Mutex<Option<String>>,
}

impl MemoryEphemeralSlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EphemeralSlot for MemoryEphemeralSlot {
    fn get(&self) -> Option<String> {
        self.value.lock().expect("slot lock poisoned").clone()
    }

    fn put(&self, value: &str) {
        *self.value.lock().expect("slot lock poisoned") = Some(value.to_string());
    }
}
