//! Prompt pools: the candidate notes for a key + clef combination.
//!
//! A pool is the cross-product of a key's diatonic scale with a clef's two
//! display octaves, in a deterministic order: the lower octave's full scale
//! first, then the higher octave's, each block in scale order. Callers rely
//! on that order when rendering answer-choice lists; random prompts come
//! from [`Pool::pick`] with an injected RNG.

use rand::Rng;
use serde::Serialize;

use crate::clef::Clef;
use crate::key::KeySignature;
use crate::note::NoteSpec;

/// The ordered candidate set of notes for one key + clef combination.
///
/// Built fresh per request and owned by the caller; there is no caching.
/// Construction is the only way to obtain a `Pool`, and every key has 7
/// scale notes and every clef 2 octaves, so a pool is never empty and
/// always holds 14 distinct specs.
#[derive(Debug, Clone, Serialize)]
pub struct Pool {
    key: KeySignature,
    clef: Clef,
    notes: Vec<NoteSpec>,
}

impl Pool {
    /// Builds the full candidate pool for a key + clef combination.
    ///
    /// # Examples
    /// ```
    /// use notedrill_theory::{Clef, KeySignature, NoteName, Pool};
    ///
    /// let pool = Pool::build(KeySignature::G, Clef::Treble);
    /// assert_eq!(pool.len(), 14);
    /// assert_eq!(pool.as_slice()[0].name, NoteName::G);
    /// assert_eq!(pool.as_slice()[0].octave.number(), 4);
    /// ```
    pub fn build(key: KeySignature, clef: Clef) -> Self {
        let scale = key.scale();
        let (low, high) = clef.octave_range();
        let mut notes = Vec::with_capacity(scale.len() * 2);
        for octave in [low, high] {
            for name in scale {
                notes.push(NoteSpec::new(name, octave));
            }
        }
        Self { key, clef, notes }
    }

    /// Returns the key signature this pool was built for.
    pub fn key(&self) -> KeySignature {
        self.key
    }

    /// Returns the clef this pool was built for.
    pub fn clef(&self) -> Clef {
        self.clef
    }

    /// Returns the number of candidate notes (14 under the current tables).
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Checks whether the pool is empty. Never true for a built pool.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns the candidates in their deterministic order.
    pub fn as_slice(&self) -> &[NoteSpec] {
        &self.notes
    }

    /// Iterates over the candidates in their deterministic order.
    pub fn iter(&self) -> std::slice::Iter<'_, NoteSpec> {
        self.notes.iter()
    }

    /// Draws one note uniformly at random from the pool.
    ///
    /// The RNG is injected so callers choose between ambient randomness
    /// (`rand::thread_rng`) and a seeded stream (`rand_pcg::Pcg32`) for
    /// reproducible draws.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> NoteSpec {
        self.notes[rng.gen_range(0..self.notes.len())]
    }
}

impl<'a> IntoIterator for &'a Pool {
    type Item = &'a NoteSpec;
    type IntoIter = std::slice::Iter<'a, NoteSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
