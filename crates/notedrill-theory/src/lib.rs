//! Notedrill Core Theory - Key Signatures, Clefs, and Note Prompt Pools
//!
//! This crate enumerates the candidate notes a learner can be prompted with
//! for a given key signature and clef, and draws uniformly random prompts
//! from that set. It is the pure core of the practice tool: all inputs are
//! closed enumerations, all functions are total, and the only side effect
//! is reading the RNG the caller injects.
//!
//! # Overview
//!
//! - A [`KeySignature`] maps to its 7-note diatonic scale with correct
//!   enharmonic spelling (F major contains Bb, never A#).
//! - A [`Clef`] maps to the pair of adjacent octaves prompts are shown in.
//! - [`Pool::build`] cross-products the two into the ordered candidate set
//!   (always 14 notes: lower octave's scale, then the higher octave's).
//! - [`Pool::pick`] draws one candidate uniformly from an injected
//!   [`rand::Rng`], so tests and seeded callers get reproducible streams.
//!
//! # Example
//!
//! ```
//! use notedrill_theory::{Clef, KeySignature, Pool};
//!
//! let pool = Pool::build(KeySignature::G, Clef::Treble);
//! assert_eq!(pool.len(), 14);
//!
//! let prompt = pool.pick(&mut rand::thread_rng());
//! assert!(pool.iter().any(|candidate| *candidate == prompt));
//! ```
//!
//! # Modules
//!
//! - [`key`]: Key signatures and their hand-encoded diatonic scales
//! - [`clef`]: Clefs and their display octave ranges
//! - [`note`]: Note names, octaves, and note specifications
//! - [`pool`]: Pool construction and uniform sampling
//! - [`error`]: Boundary parse errors

pub mod clef;
pub mod error;
pub mod key;
pub mod note;
pub mod pool;

// Re-export the public surface at the crate root
pub use clef::Clef;
pub use error::{
    OctaveOutOfRangeError, ParseClefError, ParseKeySignatureError, ParseNoteNameError,
};
pub use key::KeySignature;
pub use note::{NoteName, NoteSpec, Octave};
pub use pool::Pool;

/// Crate version for tool identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
