//! Extract command implementation

use std::path::Path;

use anyhow::{Context, Result};

use flickerless::extractor::{self, SnapshotDocument};

/// Run the extraction heuristic on a document snapshot and print the color
pub fn extract_command(snapshot_path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(snapshot_path)
        .with_context(|| format!("Failed to read snapshot: {}", snapshot_path.display()))?;
    let snapshot: SnapshotDocument = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot: {}", snapshot_path.display()))?;

    let color = extractor::extract(&snapshot);
    println!("{color}");
    Ok(())
}
