//! Apply command implementation
//!
//! Applies a preset to an armature's persisted settings and validates the
//! result against the armature's bone list.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use rigmap_core::apply_preset;

use crate::store;

/// Run the apply command
///
/// # Arguments
/// * `preset` - Preset identifier (file name with extension)
/// * `dir` - Preset directory
/// * `settings_path` - Persisted settings JSON (created if missing)
/// * `bones_path` - Armature bone list, one name per line
/// * `separator` - Namespace separator for prefix detection
/// * `output` - Output settings path (default: overwrite `settings_path`)
///
/// # Returns
/// Exit code: 0 if a preset was applied, 1 on absence
pub fn run(
    preset: &str,
    dir: &str,
    settings_path: &str,
    bones_path: &str,
    separator: char,
    output: Option<&str>,
) -> Result<ExitCode> {
    let settings_path = Path::new(settings_path);
    let mut settings = store::load_settings_or_default(settings_path)?;
    let bones = store::load_bone_list(Path::new(bones_path))?;

    if !apply_preset(Path::new(dir), preset, &mut settings, &bones, separator)? {
        eprintln!(
            "{} no preset named {} in {}",
            "no mapping:".yellow(),
            preset,
            dir
        );
        return Ok(ExitCode::from(1));
    }

    let out = output.map(Path::new).unwrap_or(settings_path);
    store::save_settings(out, &settings)?;

    println!(
        "{} {} ({} bones mapped)",
        "Applied:".green().bold(),
        preset,
        settings.mapped_bone_count()
    );
    Ok(ExitCode::SUCCESS)
}
