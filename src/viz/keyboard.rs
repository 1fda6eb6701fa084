/// Keyboard overlay of a scale
///
/// One octave of piano keys annotated against the current scale. The
/// black-key row carries explicit gaps (between E-F and B-C) so a
/// renderer can lay keys out positionally.

use crate::notes::PitchClass;
use crate::theory::scale::Scale;
use serde::{Deserialize, Serialize};

const WHITE_KEYS: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];

const BLACK_KEYS: [Option<&str>; 7] = [
    Some("C#"),
    Some("D#"),
    None,
    Some("F#"),
    Some("G#"),
    Some("A#"),
    None,
];

/// One key of the overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyCell {
    pub note: String,
    pub in_scale: bool,
    pub is_root: bool,
}

/// One octave of annotated keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardOverlay {
    pub white_keys: Vec<KeyCell>,
    /// Index-aligned with `white_keys`; `None` marks the two gaps
    pub black_keys: Vec<Option<KeyCell>>,
    pub scale_notes: Vec<String>,
    pub root_note: String,
}

/// Build the keyboard overlay for a scale
pub fn build_keyboard(scale: &Scale) -> KeyboardOverlay {
    let root = PitchClass::parse(scale.root()).unwrap_or(PitchClass::C);

    let scale_pitches: Vec<PitchClass> = scale
        .notes
        .iter()
        .filter_map(|n| PitchClass::parse(n).ok())
        .collect();

    let annotate = |name: &str| {
        let pitch = PitchClass::parse(name).expect("keyboard names are canonical");
        KeyCell {
            note: name.to_string(),
            in_scale: scale_pitches.contains(&pitch),
            is_root: pitch == root,
        }
    };

    KeyboardOverlay {
        white_keys: WHITE_KEYS.iter().map(|n| annotate(n)).collect(),
        black_keys: BLACK_KEYS
            .iter()
            .map(|k| k.map(|n| annotate(n)))
            .collect(),
        scale_notes: scale.notes.clone(),
        root_note: scale.root().to_string(),
    }
}
