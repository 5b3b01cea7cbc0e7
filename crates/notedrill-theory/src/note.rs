//! Note names, octaves, and note specifications.
//!
//! A [`NoteName`] is one of the twelve pitch classes under a fixed enharmonic
//! spelling: every sharp key spells its accidentals with sharps, every flat
//! key with flats, and the two spellings of the same pitch class are distinct
//! values. An [`Octave`] covers the mid-range band 2..=5 used for prompts;
//! octaves outside that band have no representation.

use serde::{Deserialize, Serialize};

use crate::error::{OctaveOutOfRangeError, ParseNoteNameError};

/// A pitch class under a fixed enharmonic spelling.
///
/// The naturals and sharps cover the chromatic scale; the four flat
/// spellings (`Db`, `Eb`, `Ab`, `Bb`) duplicate pitch classes 1, 3, 8, and
/// 10 so that flat keys can spell their scales correctly. `Bb` and `A#` are
/// the same pitch but never interchangeable values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteName {
    /// C natural.
    C,
    /// C sharp.
    #[serde(rename = "C#")]
    CSharp,
    /// D natural.
    D,
    /// D sharp.
    #[serde(rename = "D#")]
    DSharp,
    /// E natural.
    E,
    /// F natural.
    F,
    /// F sharp.
    #[serde(rename = "F#")]
    FSharp,
    /// G natural.
    G,
    /// G sharp.
    #[serde(rename = "G#")]
    GSharp,
    /// A natural.
    A,
    /// A sharp.
    #[serde(rename = "A#")]
    ASharp,
    /// B natural.
    B,
    /// B flat (same pitch class as A#, flat spelling).
    #[serde(rename = "Bb")]
    BFlat,
    /// E flat (same pitch class as D#, flat spelling).
    #[serde(rename = "Eb")]
    EFlat,
    /// A flat (same pitch class as G#, flat spelling).
    #[serde(rename = "Ab")]
    AFlat,
    /// D flat (same pitch class as C#, flat spelling).
    #[serde(rename = "Db")]
    DFlat,
}

impl NoteName {
    /// All note name spellings, chromatic naturals/sharps first, then flats.
    pub const ALL: [NoteName; 16] = [
        NoteName::C,
        NoteName::CSharp,
        NoteName::D,
        NoteName::DSharp,
        NoteName::E,
        NoteName::F,
        NoteName::FSharp,
        NoteName::G,
        NoteName::GSharp,
        NoteName::A,
        NoteName::ASharp,
        NoteName::B,
        NoteName::BFlat,
        NoteName::EFlat,
        NoteName::AFlat,
        NoteName::DFlat,
    ];

    /// Returns the conventional spelling (e.g., "C#", "Bb").
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::CSharp => "C#",
            NoteName::D => "D",
            NoteName::DSharp => "D#",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::FSharp => "F#",
            NoteName::G => "G",
            NoteName::GSharp => "G#",
            NoteName::A => "A",
            NoteName::ASharp => "A#",
            NoteName::B => "B",
            NoteName::BFlat => "Bb",
            NoteName::EFlat => "Eb",
            NoteName::AFlat => "Ab",
            NoteName::DFlat => "Db",
        }
    }

    /// Returns the pitch class as a semitone offset from C (0-11).
    pub fn pitch_class(&self) -> u8 {
        match self {
            NoteName::C => 0,
            NoteName::CSharp | NoteName::DFlat => 1,
            NoteName::D => 2,
            NoteName::DSharp | NoteName::EFlat => 3,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::FSharp => 6,
            NoteName::G => 7,
            NoteName::GSharp | NoteName::AFlat => 8,
            NoteName::A => 9,
            NoteName::ASharp | NoteName::BFlat => 10,
            NoteName::B => 11,
        }
    }

    /// Checks if this spelling carries a sharp.
    pub fn is_sharp(&self) -> bool {
        matches!(
            self,
            NoteName::CSharp
                | NoteName::DSharp
                | NoteName::FSharp
                | NoteName::GSharp
                | NoteName::ASharp
        )
    }

    /// Checks if this spelling carries a flat.
    pub fn is_flat(&self) -> bool {
        matches!(
            self,
            NoteName::BFlat | NoteName::EFlat | NoteName::AFlat | NoteName::DFlat
        )
    }
}

impl std::fmt::Display for NoteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NoteName {
    type Err = ParseNoteNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NoteName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseNoteNameError(trimmed.to_string()))
    }
}

/// A display octave in the mid-range practice band.
///
/// Serializes as its octave number; deserialization rejects anything
/// outside 2..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Octave {
    /// Octave 2 (bass range).
    Two = 2,
    /// Octave 3.
    Three = 3,
    /// Octave 4 (middle C's octave).
    Four = 4,
    /// Octave 5 (treble range).
    Five = 5,
}

impl Octave {
    /// All octaves, ascending.
    pub const ALL: [Octave; 4] = [Octave::Two, Octave::Three, Octave::Four, Octave::Five];

    /// Returns the octave number (2-5).
    pub fn number(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for Octave {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl TryFrom<u8> for Octave {
    type Error = OctaveOutOfRangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Octave::Two),
            3 => Ok(Octave::Three),
            4 => Ok(Octave::Four),
            5 => Ok(Octave::Five),
            other => Err(OctaveOutOfRangeError(other)),
        }
    }
}

impl From<Octave> for u8 {
    fn from(octave: Octave) -> Self {
        octave.number()
    }
}

/// One concrete pitch: a note name plus its octave.
///
/// A plain value pair. Two specs with equal fields are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoteSpec {
    /// The spelled note name.
    pub name: NoteName,
    /// The display octave.
    pub octave: Octave,
}

impl NoteSpec {
    /// Creates a new note specification.
    pub fn new(name: NoteName, octave: Octave) -> Self {
        Self { name, octave }
    }
}

impl std::fmt::Display for NoteSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.name, self.octave)
    }
}
