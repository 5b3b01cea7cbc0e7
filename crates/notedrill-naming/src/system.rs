//! Naming systems and their label tables.

use serde::{Deserialize, Serialize};

use notedrill_theory::{NoteName, NoteSpec};

use crate::error::ParseNamingSystemError;

/// A user-facing note naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NamingSystem {
    /// Letter names ("C", "F#", "Bb").
    #[default]
    Letters,
    /// Fixed-do solfege syllables ("Do", "Fa#", "Sib").
    Solfege,
}

impl NamingSystem {
    /// All recognized naming systems.
    pub const ALL: [NamingSystem; 2] = [NamingSystem::Letters, NamingSystem::Solfege];

    /// Returns the stable identifier used on the wire and in the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingSystem::Letters => "letters",
            NamingSystem::Solfege => "solfege",
        }
    }
}

impl std::fmt::Display for NamingSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NamingSystem {
    type Err = ParseNamingSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NamingSystem::ALL
            .iter()
            .copied()
            .find(|system| system.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseNamingSystemError(trimmed.to_string()))
    }
}

/// Returns the display label for a note name under a naming system.
///
/// # Examples
/// ```
/// use notedrill_naming::{label, NamingSystem};
/// use notedrill_theory::NoteName;
///
/// assert_eq!(label(NoteName::FSharp, NamingSystem::Letters), "F#");
/// assert_eq!(label(NoteName::FSharp, NamingSystem::Solfege), "Fa#");
/// ```
pub fn label(note: NoteName, system: NamingSystem) -> &'static str {
    match system {
        NamingSystem::Letters => note.as_str(),
        NamingSystem::Solfege => solfege_label(note),
    }
}

/// Returns the full label for a note spec, octave number included
/// (e.g., "F#4" or "Fa#4").
pub fn spec_label(spec: NoteSpec, system: NamingSystem) -> String {
    format!("{}{}", label(spec.name, system), spec.octave)
}

/// Fixed-do solfege spelling: sharps keep a `#` suffix, flats a `b` suffix.
fn solfege_label(note: NoteName) -> &'static str {
    match note {
        NoteName::C => "Do",
        NoteName::CSharp => "Do#",
        NoteName::D => "Re",
        NoteName::DSharp => "Re#",
        NoteName::E => "Mi",
        NoteName::F => "Fa",
        NoteName::FSharp => "Fa#",
        NoteName::G => "Sol",
        NoteName::GSharp => "Sol#",
        NoteName::A => "La",
        NoteName::ASharp => "La#",
        NoteName::B => "Si",
        NoteName::BFlat => "Sib",
        NoteName::EFlat => "Mib",
        NoteName::AFlat => "Lab",
        NoteName::DFlat => "Reb",
    }
}
