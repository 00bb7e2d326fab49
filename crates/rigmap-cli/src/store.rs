//! Persisted settings and bone-list files.
//!
//! The host application keeps retarget settings attached to each armature;
//! the CLI stands in for that store with one JSON file per armature. Bone
//! lists are plain text, one bone name per line, in armature order.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rigmap_core::SkeletonMapping;

/// Loads persisted settings from a JSON file.
pub fn load_settings(path: &Path) -> Result<SkeletonMapping> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid settings JSON: {}", path.display()))
}

/// Loads persisted settings, or a fresh default mapping when the file does
/// not exist yet (first use on an armature).
pub fn load_settings_or_default(path: &Path) -> Result<SkeletonMapping> {
    if path.is_file() {
        load_settings(path)
    } else {
        Ok(SkeletonMapping::default())
    }
}

/// Writes persisted settings back as pretty JSON.
pub fn save_settings(path: &Path, settings: &SkeletonMapping) -> Result<()> {
    let json = serde_json::to_string_pretty(settings).context("failed to serialize settings")?;
    fs::write(path, json + "\n")
        .with_context(|| format!("failed to write settings file: {}", path.display()))
}

/// Reads a bone list: one name per line, blank lines and `#` comments
/// skipped. Order is preserved; the first entry drives prefix detection.
pub fn load_bone_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read bone list: {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
