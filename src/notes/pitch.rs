/// Pitch-class arithmetic over the 12-tone chromatic circle
///
/// A pitch class is one of the 12 canonical chromatic spellings. Spelled
/// notes (including theoretical ones like E# or Cb) resolve to a pitch
/// class by letter + accidental arithmetic.

use crate::error::{Result, TheoryError};
use serde::{Deserialize, Serialize};

/// The 12 canonical chromatic spellings, sharp family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

/// All pitch classes in chromatic order, index 0 = C
pub const CHROMATIC: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::Cs,
    PitchClass::D,
    PitchClass::Ds,
    PitchClass::E,
    PitchClass::F,
    PitchClass::Fs,
    PitchClass::G,
    PitchClass::Gs,
    PitchClass::A,
    PitchClass::As,
    PitchClass::B,
];

impl PitchClass {
    /// Chromatic index of this pitch class (C = 0 .. B = 11)
    pub fn index(self) -> usize {
        match self {
            PitchClass::C => 0,
            PitchClass::Cs => 1,
            PitchClass::D => 2,
            PitchClass::Ds => 3,
            PitchClass::E => 4,
            PitchClass::F => 5,
            PitchClass::Fs => 6,
            PitchClass::G => 7,
            PitchClass::Gs => 8,
            PitchClass::A => 9,
            PitchClass::As => 10,
            PitchClass::B => 11,
        }
    }

    /// Pitch class at a chromatic index, wrapping modulo 12
    pub fn from_index(index: usize) -> Self {
        CHROMATIC[index % 12]
    }

    /// Transpose by a number of semitones (negative = down), wrapping
    pub fn transpose(self, semitones: i32) -> Self {
        let idx = (self.index() as i32 + semitones).rem_euclid(12);
        CHROMATIC[idx as usize]
    }

    /// Resolve a spelled note name to its pitch class
    ///
    /// Accepts a letter A-G (case-insensitive) followed by any run of
    /// `#`/`b` accidentals, so theoretical spellings like "E#", "Cb" or
    /// "B#" resolve to the pitch they actually sound.
    ///
    /// # Arguments
    /// * `name` - Spelled note name, e.g. "C", "F#", "Bb", "Cb"
    ///
    /// # Returns
    /// * `Ok(PitchClass)` - The resolved pitch class
    /// * `Err(TheoryError::InvalidNote)` - If the spelling is not a note
    pub fn parse(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        let mut chars = trimmed.chars();

        let letter = chars
            .next()
            .ok_or_else(|| TheoryError::InvalidNote(name.to_string()))?;

        let base: i32 = match letter.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return Err(TheoryError::InvalidNote(name.to_string())),
        };

        let mut accidental: i32 = 0;
        for c in chars {
            match c {
                '#' => accidental += 1,
                'b' => accidental -= 1,
                _ => return Err(TheoryError::InvalidNote(name.to_string())),
            }
        }

        let idx = (base + accidental).rem_euclid(12);
        Ok(CHROMATIC[idx as usize])
    }

    /// Sharp-family name of this pitch class
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }
}

impl std::fmt::Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_distinct_values() {
        let mut indices: Vec<usize> = CHROMATIC.iter().map(|p| p.index()).collect();
        indices.sort();
        indices.dedup();
        assert_eq!(indices.len(), 12);
    }

    #[test]
    fn test_parse_plain_and_accidentals() {
        assert_eq!(PitchClass::parse("C").unwrap(), PitchClass::C);
        assert_eq!(PitchClass::parse("f#").unwrap(), PitchClass::Fs);
        assert_eq!(PitchClass::parse("Bb").unwrap(), PitchClass::As);
    }

    #[test]
    fn test_parse_theoretical_spellings() {
        // E# sounds F, Cb sounds B, B# wraps to C, Fb sounds E
        assert_eq!(PitchClass::parse("E#").unwrap(), PitchClass::F);
        assert_eq!(PitchClass::parse("Cb").unwrap(), PitchClass::B);
        assert_eq!(PitchClass::parse("B#").unwrap(), PitchClass::C);
        assert_eq!(PitchClass::parse("Fb").unwrap(), PitchClass::E);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(PitchClass::parse("H").is_err());
        assert!(PitchClass::parse("").is_err());
        assert!(PitchClass::parse("C minor").is_err());
    }

    #[test]
    fn test_transpose_wraps() {
        assert_eq!(PitchClass::C.transpose(7), PitchClass::G);
        assert_eq!(PitchClass::C.transpose(-7), PitchClass::F);
        assert_eq!(PitchClass::B.transpose(1), PitchClass::C);
        assert_eq!(PitchClass::C.transpose(12), PitchClass::C);
    }

    #[test]
    fn test_display_matches_sharp_family() {
        assert_eq!(PitchClass::Cs.to_string(), "C#");
        assert_eq!(PitchClass::from_index(10).to_string(), "A#");
    }
}
