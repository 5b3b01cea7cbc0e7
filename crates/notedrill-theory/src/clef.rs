//! Clefs and their display octave ranges.

use serde::{Deserialize, Serialize};

use crate::error::ParseClefError;
use crate::note::Octave;

/// A notational staff convention, used here only to pick the pair of
/// octaves a prompt is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Clef {
    /// Treble (G) clef.
    #[default]
    Treble,
    /// Bass (F) clef.
    Bass,
    /// Alto (C) clef.
    Alto,
    /// Tenor (C) clef.
    Tenor,
}

impl Clef {
    /// All supported clefs.
    pub const ALL: [Clef; 4] = [Clef::Treble, Clef::Bass, Clef::Alto, Clef::Tenor];

    /// Returns the two adjacent display octaves for this clef, ascending.
    pub fn octave_range(&self) -> (Octave, Octave) {
        match self {
            Clef::Bass => (Octave::Two, Octave::Three),
            Clef::Alto | Clef::Tenor => (Octave::Three, Octave::Four),
            Clef::Treble => (Octave::Four, Octave::Five),
        }
    }

    /// Returns the lowercase clef name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Clef::Treble => "treble",
            Clef::Bass => "bass",
            Clef::Alto => "alto",
            Clef::Tenor => "tenor",
        }
    }
}

impl std::fmt::Display for Clef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Clef {
    type Err = ParseClefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Clef::ALL
            .iter()
            .copied()
            .find(|clef| clef.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseClefError(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octave_ranges() {
        assert_eq!(Clef::Bass.octave_range(), (Octave::Two, Octave::Three));
        assert_eq!(Clef::Alto.octave_range(), (Octave::Three, Octave::Four));
        assert_eq!(Clef::Tenor.octave_range(), (Octave::Three, Octave::Four));
        assert_eq!(Clef::Treble.octave_range(), (Octave::Four, Octave::Five));
    }

    #[test]
    fn test_ranges_are_adjacent_and_in_band() {
        for clef in Clef::ALL {
            let (low, high) = clef.octave_range();
            assert_eq!(high.number(), low.number() + 1, "{} range not adjacent", clef);
            assert!((2..=5).contains(&low.number()));
            assert!((2..=5).contains(&high.number()));
        }
    }

    #[test]
    fn test_clef_from_str() {
        assert_eq!("treble".parse::<Clef>().unwrap(), Clef::Treble);
        assert_eq!("BASS".parse::<Clef>().unwrap(), Clef::Bass);
        assert_eq!(" alto ".parse::<Clef>().unwrap(), Clef::Alto);
        assert!("soprano".parse::<Clef>().is_err());
        assert!("".parse::<Clef>().is_err());
    }

    #[test]
    fn test_clef_serialization() {
        let json = serde_json::to_string(&Clef::Treble).unwrap();
        assert_eq!(json, r#""treble""#);
        let parsed: Clef = serde_json::from_str(r#""tenor""#).unwrap();
        assert_eq!(parsed, Clef::Tenor);
    }
}
