//! Boundary parse errors.
//!
//! Every type in this crate is a closed enumeration, so internal functions
//! are total. The only failure points are the boundary conversions from
//! free-form input, collected here.

use thiserror::Error;

/// Unknown key signature spelling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key signature '{0}' (expected one of C, G, D, A, E, F, Bb, Eb, Ab)")]
pub struct ParseKeySignatureError(pub String);

/// Unknown clef name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown clef '{0}' (expected one of treble, bass, alto, tenor)")]
pub struct ParseClefError(pub String);

/// Unknown note name spelling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown note name '{0}'")]
pub struct ParseNoteNameError(pub String);

/// Octave number outside the supported 2..=5 band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("octave {0} out of range (supported range is 2-5)")]
pub struct OctaveOutOfRangeError(pub u8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ParseKeySignatureError("H".to_string());
        assert!(err.to_string().contains("'H'"));
        let err = ParseClefError("soprano".to_string());
        assert!(err.to_string().contains("'soprano'"));
        let err = OctaveOutOfRangeError(7);
        assert!(err.to_string().contains('7'));
    }
}
