/// Error types for keywise
///
/// This module defines all possible errors that can occur in the engine.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for keywise operations
#[derive(Error, Debug)]
pub enum TheoryError {
    /// Derived data requested before its inputs were generated
    #[error("Notes and chords have not been generated yet")]
    NotYetComputed,

    /// Scale degree outside the diatonic range
    #[error("Scale degree {degree} out of range (scale has {len} degrees)")]
    DegreeOutOfRange { degree: usize, len: usize },

    /// Chord index outside the built chord list
    #[error("Chord index {index} out of range ({len} chords)")]
    ChordIndexOutOfRange { index: usize, len: usize },

    /// Mode string that is neither major nor minor
    #[error("Unknown mode: {0} (expected 'major' or 'minor')")]
    UnknownMode(String),

    /// Note name that cannot be resolved to a pitch class
    #[error("Invalid note name: {0}")]
    InvalidNote(String),

    /// External scale lookup failed or timed out
    #[error("Scale lookup failed: {0}")]
    LookupFailed(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors (writing output, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for keywise operations
pub type Result<T> = std::result::Result<T, TheoryError>;

/// Convert TheoryError to a user-friendly error message
impl TheoryError {
    pub fn user_message(&self) -> String {
        match self {
            TheoryError::NotYetComputed => {
                "Generate the scale notes and chords first, then retry".to_string()
            }
            TheoryError::DegreeOutOfRange { degree, len } => {
                format!(
                    "Scale degree {} does not exist (valid: 0-{})",
                    degree,
                    len.saturating_sub(1)
                )
            }
            TheoryError::ChordIndexOutOfRange { index, len } => {
                format!("Chord {} does not exist (the key has {} chords)", index, len)
            }
            TheoryError::UnknownMode(mode) => {
                format!("'{}' is not a mode keywise knows. Try 'major' or 'minor'", mode)
            }
            TheoryError::InvalidNote(note) => {
                format!("'{}' is not a note name (expected A-G with optional # or b)", note)
            }
            TheoryError::LookupFailed(msg) => {
                format!("External scale lookup failed: {}", msg)
            }
            TheoryError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            TheoryError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = TheoryError::UnknownMode("dorian".to_string());
        assert!(err.user_message().contains("dorian"));

        let err = TheoryError::NotYetComputed;
        assert!(err.user_message().contains("first"));
    }

    #[test]
    fn test_error_display() {
        let err = TheoryError::InvalidNote("H".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Invalid note"));

        let err = TheoryError::DegreeOutOfRange { degree: 9, len: 7 };
        assert!(format!("{}", err).contains("9"));
    }
}
