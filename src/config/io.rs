//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use fs2::FileExt;

use super::Config;

impl Config {
    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults when the file
    /// does not exist. The engine must keep working without any config on
    /// disk.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::with_defaults();
        }
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Falling back to default config: {e:#}");
                Self::with_defaults()
            }
        }
    }

    /// Save configuration to a file with atomic write and file locking.
    ///
    /// An exclusive lock prevents concurrent writers, and the temp-file +
    /// rename pattern prevents corruption on crash.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        // Lock file is separate from the config to avoid issues with rename
        let lock_path = path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire config lock")?;

        let temp_path = path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .with_context(|| "Failed to write config content")?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync config file")?;

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

        // Lock released when lock_file drops
        Ok(())
    }

    /// First-install initialization: write the default config file.
    pub fn init_at(path: &Path, force: bool) -> Result<Self> {
        if path.exists() && !force {
            bail!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            );
        }
        let config = Self::with_defaults();
        config.save_to_file(path)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::super::Settings;
    use super::*;

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::with_defaults();
        config.settings.fade_out_duration_ms = 150;
        config.save_to_file(&path).unwrap();

        let reloaded = Config::from_file(&path).unwrap();
        assert_eq!(reloaded.settings.fade_out_duration_ms, 150);
        assert!(reloaded.settings.enabled);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("nope.toml"));
        assert_eq!(config.settings, Settings::default());
    }

    #[test]
    fn test_init_refuses_to_clobber() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::init_at(&path, false).unwrap();
        assert!(Config::init_at(&path, false).is_err());
        assert!(Config::init_at(&path, true).is_ok());
    }
}
