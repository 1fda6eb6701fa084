/// Key spellings and chord-root extraction
///
/// A key is a requested root spelled with an optional accidental. It keeps
/// its own spelling in output but resolves to exactly one pitch class.

use crate::error::Result;
use crate::notes::PitchClass;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Pattern for recognized key spellings: one letter, at most one accidental
fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Ga-g][#b]?$").expect("valid regex"))
}

/// A requested key: validated spelling plus its resolved pitch class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    spelling: String,
    pitch_class: PitchClass,
}

impl Key {
    /// Parse a key spelling like "C", "f#" or "Bb"
    ///
    /// Normalizes case (upper-case letter, lower-case flat) but otherwise
    /// keeps the caller's spelling. Anything that is not a single letter
    /// with at most one accidental falls back to C - the engine treats
    /// unknown keys as C rather than erroring.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if !key_pattern().is_match(trimmed) {
            return Self::fallback();
        }

        let spelling = normalize_spelling(trimmed);
        match PitchClass::parse(&spelling) {
            Ok(pitch_class) => Self {
                spelling,
                pitch_class,
            },
            Err(_) => Self::fallback(),
        }
    }

    /// The default key used when input cannot be resolved
    pub fn fallback() -> Self {
        Self {
            spelling: "C".to_string(),
            pitch_class: PitchClass::C,
        }
    }

    /// The normalized spelling, e.g. "Bb"
    pub fn spelling(&self) -> &str {
        &self.spelling
    }

    /// The pitch class this spelling sounds
    pub fn pitch_class(&self) -> PitchClass {
        self.pitch_class
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spelling)
    }
}

/// Upper-case the letter, keep the accidental as typed
fn normalize_spelling(input: &str) -> String {
    let mut out = String::with_capacity(2);
    for (i, c) in input.chars().enumerate() {
        if i == 0 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Extract the root note from a chord string
///
/// Strips quality suffixes ("m", "dim", "7") while keeping a trailing
/// sharp or flat, so "F#dim" -> "F#" and "Bb7" -> "Bb".
pub fn chord_root(chord: &str) -> &str {
    let bytes = chord.as_bytes();
    if bytes.len() > 1 && (bytes[1] == b'#' || bytes[1] == b'b') {
        &chord[..2]
    } else if !chord.is_empty() {
        &chord[..1]
    } else {
        chord
    }
}

/// Resolve a chord string to the pitch class of its root
pub fn chord_root_pitch(chord: &str) -> Result<PitchClass> {
    PitchClass::parse(chord_root(chord))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case() {
        let key = Key::parse("bb");
        assert_eq!(key.spelling(), "Bb");
        assert_eq!(key.pitch_class(), PitchClass::As);

        let key = Key::parse("f#");
        assert_eq!(key.spelling(), "F#");
        assert_eq!(key.pitch_class(), PitchClass::Fs);
    }

    #[test]
    fn test_unresolvable_falls_back_to_c() {
        assert_eq!(Key::parse("H").spelling(), "C");
        assert_eq!(Key::parse("").spelling(), "C");
        assert_eq!(Key::parse("C##").spelling(), "C");
        assert_eq!(Key::parse("Db major").spelling(), "C");
    }

    #[test]
    fn test_chord_root_strips_suffixes() {
        assert_eq!(chord_root("Dm"), "D");
        assert_eq!(chord_root("F#dim"), "F#");
        assert_eq!(chord_root("Bb7"), "Bb");
        assert_eq!(chord_root("G"), "G");
    }

    #[test]
    fn test_chord_root_pitch() {
        assert_eq!(chord_root_pitch("Bbm").unwrap(), PitchClass::As);
        assert_eq!(chord_root_pitch("E").unwrap(), PitchClass::E);
    }
}
