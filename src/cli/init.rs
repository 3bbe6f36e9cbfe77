//! Init command implementation

use std::path::Path;

use anyhow::Result;

use flickerless::Config;

/// Write a config file with the default settings
pub fn init_command(path: &Path, force: bool) -> Result<()> {
    let config = Config::init_at(path, force)?;
    println!("Wrote {}", path.display());
    println!(
        "  enabled = {}, fade_out_duration_ms = {}, timeout_ms = {}",
        config.settings.enabled,
        config.settings.fade_out_duration_ms,
        config.settings.timeout_ms
    );
    Ok(())
}
