//! JSON output types for machine-readable CLI output.
//!
//! These back the `--json` flag on `prompt`, `pool`, and `naming` so other
//! tools can parse the output instead of scraping colored text.

use serde::{Deserialize, Serialize};

use notedrill_naming::NamingSystem;
use notedrill_theory::{Clef, KeySignature, NoteName, NoteSpec, Octave};

/// One note in JSON output: the spec fields plus its display label under
/// the active naming system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEntry {
    /// Spelled note name (e.g., "F#", "Bb").
    pub name: NoteName,
    /// Octave number (2-5).
    pub octave: Octave,
    /// Display label under the active naming system (e.g., "Fa#4").
    pub label: String,
}

impl NoteEntry {
    /// Builds an entry for a spec under a naming system.
    pub fn new(spec: NoteSpec, naming: NamingSystem) -> Self {
        Self {
            name: spec.name,
            octave: spec.octave,
            label: notedrill_naming::spec_label(spec, naming),
        }
    }
}

/// Output of the `prompt` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptOutput {
    /// Key signature the pool was built for.
    pub key: KeySignature,
    /// Clef the pool was built for.
    pub clef: Clef,
    /// Naming system used for labels.
    pub naming: NamingSystem,
    /// Seed of the draw stream, when one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// The drawn prompts, in draw order.
    pub prompts: Vec<NoteEntry>,
}

/// Output of the `pool` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolOutput {
    /// Key signature the pool was built for.
    pub key: KeySignature,
    /// Clef the pool was built for.
    pub clef: Clef,
    /// Naming system used for labels.
    pub naming: NamingSystem,
    /// The candidates in their deterministic order.
    pub notes: Vec<NoteEntry>,
}

/// Output of the `naming` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingOutput {
    /// The active (or newly set) naming system.
    pub naming: NamingSystem,
    /// Whether this invocation changed the stored preference.
    pub changed: bool,
    /// Path of the preference file.
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_entry_labels() {
        let spec = NoteSpec::new(NoteName::BFlat, Octave::Two);
        let entry = NoteEntry::new(spec, NamingSystem::Letters);
        assert_eq!(entry.label, "Bb2");
        let entry = NoteEntry::new(spec, NamingSystem::Solfege);
        assert_eq!(entry.label, "Sib2");
    }

    #[test]
    fn test_prompt_output_serialization() {
        let output = PromptOutput {
            key: KeySignature::G,
            clef: Clef::Treble,
            naming: NamingSystem::Letters,
            seed: None,
            prompts: vec![NoteEntry::new(
                NoteSpec::new(NoteName::FSharp, Octave::Five),
                NamingSystem::Letters,
            )],
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["key"], "G");
        assert_eq!(json["clef"], "treble");
        assert!(json.get("seed").is_none());
        assert_eq!(json["prompts"][0]["label"], "F#5");
    }
}
