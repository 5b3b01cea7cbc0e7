//! Naming command implementation
//!
//! Shows or changes the persisted note-naming preference.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use notedrill_naming::{JsonFileStore, NamingPreference, NamingSystem};

use super::json_output::NamingOutput;

/// Run the naming command
///
/// # Arguments
/// * `set` - Naming system to switch to (letters, solfege), or `None` to
///   show the current one
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(set: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let store = JsonFileStore::at_default_path()
        .context("could not determine a config directory for preferences")?;
    let path = store.path().display().to_string();
    let mut pref = NamingPreference::new(store);

    let (naming, changed) = match set {
        Some(value) => {
            let system: NamingSystem = value.parse()?;
            pref.set(system)
                .context("failed to persist naming preference")?;
            (system, true)
        }
        None => (pref.current(), false),
    };

    if json_output {
        let output = NamingOutput {
            naming,
            changed,
            path,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    if changed {
        println!("{} {}", "Naming set to:".green().bold(), naming);
    } else {
        println!("{} {}", "Naming:".cyan().bold(), naming);
    }
    println!("{} {}", "Preference file:".dimmed(), path.dimmed());
    Ok(ExitCode::SUCCESS)
}
