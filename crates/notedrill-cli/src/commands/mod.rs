//! CLI command implementations

pub mod naming;
pub mod pool;
pub mod prompt;

mod json_output;

use notedrill_naming::{JsonFileStore, NamingPreference, NamingSystem};

/// Returns the naming system to use for display output.
///
/// Reads the persisted preference when a config directory exists; in
/// environments without one the default (letter names) applies.
pub(crate) fn current_naming() -> NamingSystem {
    JsonFileStore::at_default_path()
        .map(|store| NamingPreference::new(store).current())
        .unwrap_or_default()
}
