//! Notedrill Display Naming - Labels and the Persisted Naming Preference
//!
//! Maps note names to user-facing labels under a chosen naming system
//! (letter names or fixed-do solfege), and persists the user's choice
//! across sessions behind an injectable key-value store.
//!
//! The preference read path never fails: an absent, unreadable, or
//! unrecognized stored value silently yields letter names, the default.
//!
//! # Example
//!
//! ```
//! use notedrill_naming::{label, NamingPreference, NamingSystem};
//! use notedrill_naming::store::MemoryStore;
//! use notedrill_theory::NoteName;
//!
//! let mut pref = NamingPreference::new(MemoryStore::new());
//! assert_eq!(pref.current(), NamingSystem::Letters);
//!
//! pref.set(NamingSystem::Solfege).unwrap();
//! assert_eq!(label(NoteName::BFlat, pref.current()), "Sib");
//! ```

pub mod error;
pub mod preference;
pub mod store;
pub mod system;

// Re-export the public surface at the crate root
pub use error::{ParseNamingSystemError, StoreError};
pub use preference::{NamingPreference, NAMING_KEY};
pub use store::{JsonFileStore, MemoryStore, PreferenceStore};
pub use system::{label, spec_label, NamingSystem};
