//! List command implementation
//!
//! Enumerates the presets available in a retarget preset directory.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use rigmap_core::list_presets;

/// Run the list command
///
/// # Arguments
/// * `dir` - Preset directory to enumerate
/// * `with_current` - Whether to include the "use current settings" sentinel
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(dir: &str, with_current: bool, json_output: bool) -> Result<ExitCode> {
    let entries = list_presets(Path::new(dir), with_current);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Presets in:".cyan().bold(), dir);
    for entry in &entries {
        if entry.description.is_empty() {
            println!("  {:<24} {}", entry.label.bold(), entry.identifier.dimmed());
        } else {
            println!("  {:<24} {}", entry.label.bold(), entry.description.dimmed());
        }
    }
    Ok(ExitCode::SUCCESS)
}
