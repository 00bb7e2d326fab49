//! Install command implementation
//!
//! Copies bundled preset files into a retarget preset directory, creating
//! the directory as needed.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use rigmap_core::install_presets;

/// Run the install command
///
/// # Arguments
/// * `from` - Directory holding the bundled preset files
/// * `to` - Retarget preset directory to install into
pub fn run(from: &str, to: &str) -> Result<ExitCode> {
    let copied = install_presets(Path::new(from), Path::new(to))
        .with_context(|| format!("failed to install presets from {from}"))?;

    println!(
        "{} {} preset file(s) into {}",
        "Installed:".green().bold(),
        copied,
        to
    );
    Ok(ExitCode::SUCCESS)
}
