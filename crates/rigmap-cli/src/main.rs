//! Rigmap CLI - Bone-name mapping for animation retargeting
//!
//! This binary provides commands for listing, inspecting, and applying
//! retarget presets against an armature's persisted mapping settings.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use rigmap_cli::commands;

/// Rigmap - Retarget Preset Mapping
#[derive(Parser)]
#[command(name = "rigmap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available retarget presets
    List {
        /// Preset directory
        #[arg(short, long)]
        dir: String,

        /// Include the "use current settings" sentinel entry
        #[arg(long)]
        with_current: bool,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a preset's bone mapping without touching any settings
    Show {
        /// Preset identifier (file name with extension)
        #[arg(short, long)]
        preset: String,

        /// Preset directory
        #[arg(short, long)]
        dir: String,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Apply a preset to persisted settings and validate against a bone list
    Apply {
        /// Preset identifier (file name with extension)
        #[arg(short, long)]
        preset: String,

        /// Preset directory
        #[arg(short, long)]
        dir: String,

        /// Persisted settings JSON (created if missing)
        #[arg(short, long)]
        settings: String,

        /// Armature bone list, one name per line
        #[arg(short, long)]
        bones: String,

        /// Namespace separator for prefix detection
        #[arg(long, default_value = ":")]
        separator: char,

        /// Output settings path (default: overwrite --settings)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate persisted settings against an armature bone list
    Validate {
        /// Persisted settings JSON
        #[arg(short, long)]
        settings: String,

        /// Armature bone list, one name per line
        #[arg(short, long)]
        bones: String,

        /// Namespace separator for prefix detection
        #[arg(long, default_value = ":")]
        separator: char,

        /// Output settings path (default: overwrite --settings)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Copy bundled preset files into a retarget preset directory
    Install {
        /// Directory holding the bundled preset files
        #[arg(long)]
        from: String,

        /// Retarget preset directory to install into
        #[arg(long)]
        to: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List {
            dir,
            with_current,
            json,
        } => commands::list::run(&dir, with_current, json),
        Commands::Show { preset, dir, pretty } => commands::show::run(&preset, &dir, pretty),
        Commands::Apply {
            preset,
            dir,
            settings,
            bones,
            separator,
            output,
        } => commands::apply::run(
            &preset,
            &dir,
            &settings,
            &bones,
            separator,
            output.as_deref(),
        ),
        Commands::Validate {
            settings,
            bones,
            separator,
            output,
        } => commands::validate::run(&settings, &bones, separator, output.as_deref()),
        Commands::Install { from, to } => commands::install::run(&from, &to),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
