//! Key signatures and their diatonic scales.
//!
//! The scale table is hand-encoded data, not interval arithmetic: accidental
//! spelling is part of the key's identity (F major contains Bb, never A#),
//! and pitch-class math cannot recover the spelling.

use serde::{Deserialize, Serialize};

use crate::error::ParseKeySignatureError;
use crate::note::NoteName;

/// A major key signature, named by its tonic.
///
/// The sharp keys are G, D, A, and E; the flat keys are F, Bb, Eb, and Ab;
/// C has no accidentals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeySignature {
    /// C major (no accidentals).
    C,
    /// G major (1 sharp).
    G,
    /// D major (2 sharps).
    D,
    /// A major (3 sharps).
    A,
    /// E major (4 sharps).
    E,
    /// F major (1 flat).
    F,
    /// Bb major (2 flats).
    #[serde(rename = "Bb")]
    BFlat,
    /// Eb major (3 flats).
    #[serde(rename = "Eb")]
    EFlat,
    /// Ab major (4 flats).
    #[serde(rename = "Ab")]
    AFlat,
}

impl KeySignature {
    /// All supported key signatures.
    pub const ALL: [KeySignature; 9] = [
        KeySignature::C,
        KeySignature::G,
        KeySignature::D,
        KeySignature::A,
        KeySignature::E,
        KeySignature::F,
        KeySignature::BFlat,
        KeySignature::EFlat,
        KeySignature::AFlat,
    ];

    /// Returns the ordered diatonic scale for this key, tonic first.
    ///
    /// # Examples
    /// ```
    /// use notedrill_theory::{KeySignature, NoteName};
    ///
    /// let scale = KeySignature::G.scale();
    /// assert_eq!(scale[0], NoteName::G);
    /// assert_eq!(scale[6], NoteName::FSharp);
    /// ```
    pub fn scale(&self) -> [NoteName; 7] {
        use NoteName::*;
        match self {
            KeySignature::C => [C, D, E, F, G, A, B],
            KeySignature::G => [G, A, B, C, D, E, FSharp],
            KeySignature::D => [D, E, FSharp, G, A, B, CSharp],
            KeySignature::A => [A, B, CSharp, D, E, FSharp, GSharp],
            KeySignature::E => [E, FSharp, GSharp, A, B, CSharp, DSharp],
            KeySignature::F => [F, G, A, BFlat, C, D, E],
            KeySignature::BFlat => [BFlat, C, D, EFlat, F, G, A],
            KeySignature::EFlat => [EFlat, F, G, AFlat, BFlat, C, D],
            KeySignature::AFlat => [AFlat, BFlat, C, DFlat, EFlat, F, G],
        }
    }

    /// Returns the tonic note name.
    pub fn tonic(&self) -> NoteName {
        self.scale()[0]
    }

    /// Returns the conventional spelling of the tonic (e.g., "Bb").
    pub fn as_str(&self) -> &'static str {
        match self {
            KeySignature::C => "C",
            KeySignature::G => "G",
            KeySignature::D => "D",
            KeySignature::A => "A",
            KeySignature::E => "E",
            KeySignature::F => "F",
            KeySignature::BFlat => "Bb",
            KeySignature::EFlat => "Eb",
            KeySignature::AFlat => "Ab",
        }
    }
}

impl std::fmt::Display for KeySignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for KeySignature {
    type Err = ParseKeySignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        KeySignature::ALL
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseKeySignatureError(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_every_scale_has_seven_distinct_names() {
        for key in KeySignature::ALL {
            let scale = key.scale();
            let distinct: HashSet<NoteName> = scale.iter().copied().collect();
            assert_eq!(distinct.len(), 7, "duplicate note name in {} major", key);
        }
    }

    #[test]
    fn test_every_scale_has_seven_distinct_pitch_classes() {
        for key in KeySignature::ALL {
            let classes: HashSet<u8> = key.scale().iter().map(|n| n.pitch_class()).collect();
            assert_eq!(classes.len(), 7, "duplicate pitch class in {} major", key);
        }
    }

    #[test]
    fn test_no_scale_mixes_sharps_and_flats() {
        for key in KeySignature::ALL {
            let scale = key.scale();
            let has_sharp = scale.iter().any(|n| n.is_sharp());
            let has_flat = scale.iter().any(|n| n.is_flat());
            assert!(
                !(has_sharp && has_flat),
                "{} major mixes sharp and flat spellings",
                key
            );
        }
    }

    #[test]
    fn test_scale_starts_at_tonic() {
        for key in KeySignature::ALL {
            assert_eq!(key.scale()[0], key.tonic());
        }
    }

    #[test]
    fn test_major_scale_interval_pattern() {
        // Whole-whole-half-whole-whole-whole from each tonic.
        let steps = [2u8, 2, 1, 2, 2, 2];
        for key in KeySignature::ALL {
            let scale = key.scale();
            for (i, step) in steps.iter().enumerate() {
                let from = scale[i].pitch_class();
                let to = scale[i + 1].pitch_class();
                assert_eq!(
                    (to + 12 - from) % 12,
                    *step,
                    "bad interval {} -> {} in {} major",
                    scale[i],
                    scale[i + 1],
                    key
                );
            }
        }
    }

    #[test]
    fn test_sharp_keys_spell_with_sharps() {
        use NoteName::*;
        assert_eq!(KeySignature::G.scale(), [G, A, B, C, D, E, FSharp]);
        assert_eq!(KeySignature::D.scale(), [D, E, FSharp, G, A, B, CSharp]);
        assert_eq!(
            KeySignature::A.scale(),
            [A, B, CSharp, D, E, FSharp, GSharp]
        );
        assert_eq!(
            KeySignature::E.scale(),
            [E, FSharp, GSharp, A, B, CSharp, DSharp]
        );
    }

    #[test]
    fn test_flat_keys_spell_with_flats() {
        use NoteName::*;
        assert_eq!(KeySignature::F.scale(), [F, G, A, BFlat, C, D, E]);
        assert_eq!(KeySignature::BFlat.scale(), [BFlat, C, D, EFlat, F, G, A]);
        assert_eq!(
            KeySignature::EFlat.scale(),
            [EFlat, F, G, AFlat, BFlat, C, D]
        );
        assert_eq!(
            KeySignature::AFlat.scale(),
            [AFlat, BFlat, C, DFlat, EFlat, F, G]
        );
    }

    #[test]
    fn test_key_from_str() {
        assert_eq!("G".parse::<KeySignature>().unwrap(), KeySignature::G);
        assert_eq!("bb".parse::<KeySignature>().unwrap(), KeySignature::BFlat);
        assert_eq!(" Eb ".parse::<KeySignature>().unwrap(), KeySignature::EFlat);
        assert!("B".parse::<KeySignature>().is_err());
        assert!("F#".parse::<KeySignature>().is_err());
        assert!("".parse::<KeySignature>().is_err());
    }

    #[test]
    fn test_key_serialization() {
        let json = serde_json::to_string(&KeySignature::BFlat).unwrap();
        assert_eq!(json, r#""Bb""#);
        let parsed: KeySignature = serde_json::from_str(r#""Ab""#).unwrap();
        assert_eq!(parsed, KeySignature::AFlat);
        let parsed: KeySignature = serde_json::from_str(r#""C""#).unwrap();
        assert_eq!(parsed, KeySignature::C);
    }
}
