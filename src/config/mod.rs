//! Configuration loading and management

mod io;
mod settings;

pub use settings::{MAX_FADE_OUT_DURATION_MS, MAX_TIMEOUT_MS, Settings};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk configuration wrapper.
///
/// The file carries a single `[settings]` table; everything else the engine
/// needs (context keys, color records) lives in its own stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Get the global config directory path (~/.flickerless/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".flickerless")
    }

    /// Get the global config file path (~/.flickerless/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }
}
