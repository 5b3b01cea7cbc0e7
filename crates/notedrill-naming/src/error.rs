//! Errors for the naming preference store.

use std::path::PathBuf;
use thiserror::Error;

/// Unrecognized naming system identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown naming system '{0}' (expected letters or solfege)")]
pub struct ParseNamingSystemError(pub String);

/// A preference store operation failed.
///
/// Read failures only surface through [`crate::store::PreferenceStore::get`];
/// the preference layer swallows them into the default system. Write
/// failures always propagate, since the caller asked for a durable change.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The preference file exists but could not be read.
    #[error("failed to read preference file {path}: {source}")]
    Read {
        /// Path of the preference file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The preference file could not be written.
    #[error("failed to write preference file {path}: {source}")]
    Write {
        /// Path of the preference file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The preference file exists but is not a valid JSON string map.
    #[error("preference file {path} is not a valid JSON map: {source}")]
    Malformed {
        /// Path of the preference file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
}
