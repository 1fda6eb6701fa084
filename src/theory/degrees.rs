/// Scale-degree naming: roman numerals, harmonic functions, tensions

use crate::error::{Result, TheoryError};
use crate::theory::scale::Mode;
use serde::{Deserialize, Serialize};

const MAJOR_NUMERALS: [&str; 7] = ["I", "ii", "iii", "IV", "V", "vi", "vii°"];
const MINOR_NUMERALS: [&str; 7] = ["i", "ii°", "III", "iv", "v", "VI", "VII"];

const FUNCTION_NAMES: [&str; 7] = [
    "Tonic",
    "Supertonic",
    "Mediant",
    "Subdominant",
    "Dominant",
    "Submediant",
    "Leading Tone",
];

/// Available tension extensions per scale degree
const TENSIONS: [&[&str]; 7] = [
    &["9", "11", "13"], // I maj7
    &["9", "11", "13"], // ii m7
    &["11", "13"],      // iii m7
    &["9", "11", "13"], // IV maj7
    &["9", "13"],       // V7 (avoid 11)
    &["9", "11"],       // vi m7
    &["11", "b13"],     // vii m7b5
];

/// One row of the scale-degree table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleDegree {
    /// 1-based degree number
    pub degree: usize,
    pub roman_numeral: String,
    pub note: String,
    pub chord: String,
    pub function_name: String,
}

/// Roman numeral for a 0-indexed degree in a mode
pub fn roman_numeral(degree: usize, mode: Mode) -> &'static str {
    let numerals = match mode {
        Mode::Major => &MAJOR_NUMERALS,
        Mode::Minor => &MINOR_NUMERALS,
    };
    numerals[degree % 7]
}

/// Harmonic function name for a 0-indexed degree
pub fn function_name(degree: usize) -> &'static str {
    FUNCTION_NAMES[degree % 7]
}

/// Assemble the scale-degree table from index-aligned notes and chords
pub fn scale_degrees(notes: &[String], chords: &[String], mode: Mode) -> Vec<ScaleDegree> {
    notes
        .iter()
        .zip(chords.iter())
        .enumerate()
        .map(|(i, (note, chord))| ScaleDegree {
            degree: i + 1,
            roman_numeral: roman_numeral(i, mode).to_string(),
            note: note.clone(),
            chord: chord.clone(),
            function_name: function_name(i).to_string(),
        })
        .collect()
}

/// Tensions available on the chord at a 0-indexed degree
///
/// # Returns
/// * `Ok(Vec<String>)` - The tension extensions for that degree
/// * `Err(TheoryError::DegreeOutOfRange)` - If the degree exceeds the scale
pub fn tensions(degree: usize) -> Result<Vec<String>> {
    TENSIONS
        .get(degree)
        .map(|t| t.iter().map(|s| s.to_string()).collect())
        .ok_or(TheoryError::DegreeOutOfRange { degree, len: 7 })
}
