//! Show command implementation
//!
//! Loads a preset in isolation and prints the resulting mapping as JSON.
//! No settings file is read or written.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use rigmap_core::load_preset;

/// Run the show command
///
/// # Arguments
/// * `preset` - Preset identifier (file name with extension)
/// * `dir` - Preset directory
/// * `pretty` - Pretty-print the output JSON
///
/// # Returns
/// Exit code: 0 if the preset was found, 1 on absence
pub fn run(preset: &str, dir: &str, pretty: bool) -> Result<ExitCode> {
    match load_preset(Path::new(dir), preset)? {
        Some(mapping) => {
            let json = if pretty {
                serde_json::to_string_pretty(&mapping)?
            } else {
                serde_json::to_string(&mapping)?
            };
            println!("{json}");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!(
                "{} no preset named {} in {}",
                "no mapping:".yellow(),
                preset,
                dir
            );
            Ok(ExitCode::from(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn shows_existing_preset() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("rig.py"),
            "import bpy\nskeleton = bpy.x\nskeleton.spine.hips = 'Hips'\n",
        )
        .unwrap();
        assert!(run("rig.py", dir.path().to_str().unwrap(), true).is_ok());
    }

    #[test]
    fn missing_preset_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        // Absence exits non-zero but never fails with an error.
        assert!(run("missing.py", dir.path().to_str().unwrap(), false).is_ok());
    }
}
