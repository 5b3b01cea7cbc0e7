//! The persisted naming preference.
//!
//! Read-fallback-write: the current system comes from the store when the
//! stored value is recognized, and silently falls back to letter names when
//! the value is absent, unreadable, or unrecognized. Changing the system
//! writes straight through to the store.

use crate::error::StoreError;
use crate::store::PreferenceStore;
use crate::system::NamingSystem;

/// Store key holding the chosen naming system.
pub const NAMING_KEY: &str = "note-naming-system";

/// The user's naming preference, backed by an injected store.
#[derive(Debug, Clone)]
pub struct NamingPreference<S> {
    store: S,
}

impl<S: PreferenceStore> NamingPreference<S> {
    /// Wraps a preference store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the current naming system.
    ///
    /// The stored value wins when it parses as a recognized system; a
    /// missing value, a store read failure, or an unrecognized identifier
    /// all yield the default. The preference is cosmetic, so availability
    /// beats strictness here and this path never reports an error.
    pub fn current(&self) -> NamingSystem {
        self.store
            .get(NAMING_KEY)
            .ok()
            .flatten()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Persists a new naming system.
    pub fn set(&mut self, system: NamingSystem) -> Result<(), StoreError> {
        self.store.set(NAMING_KEY, system.as_str())
    }

    /// Returns the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}
