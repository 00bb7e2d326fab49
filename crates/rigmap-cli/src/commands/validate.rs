//! Validate command implementation
//!
//! Runs the bone-name validation pass alone: every mapped name in the
//! persisted settings is resolved against the armature's bone list, with
//! unresolvable names cleared.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use rigmap_core::validate_mapping;

use crate::store;

/// Run the validate command
///
/// # Arguments
/// * `settings_path` - Persisted settings JSON
/// * `bones_path` - Armature bone list, one name per line
/// * `separator` - Namespace separator for prefix detection
/// * `output` - Output settings path (default: overwrite `settings_path`)
pub fn run(
    settings_path: &str,
    bones_path: &str,
    separator: char,
    output: Option<&str>,
) -> Result<ExitCode> {
    let settings_path = Path::new(settings_path);
    let mut settings = store::load_settings(settings_path)?;
    let bones = store::load_bone_list(Path::new(bones_path))?;

    let before = settings.mapped_bone_count();
    validate_mapping(&mut settings, &bones, separator);
    let after = settings.mapped_bone_count();

    let out = output.map(Path::new).unwrap_or(settings_path);
    store::save_settings(out, &settings)?;

    println!(
        "{} {} mapped name(s) against {} bone(s)",
        "Validated:".green().bold(),
        after,
        bones.len()
    );
    if after < before {
        println!(
            "  {} {} unresolvable name(s) cleared",
            "!".yellow(),
            before - after
        );
    }
    Ok(ExitCode::SUCCESS)
}
