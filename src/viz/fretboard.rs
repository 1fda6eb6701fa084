/// Fretboard projection of a scale
///
/// Projects the scale onto a standard-tuned guitar neck as plain data,
/// consumed by whatever renders it (terminal table, web component).

use crate::config::{DEFAULT_FRETS, MAX_FRETS};
use crate::notes::PitchClass;
use crate::theory::scale::Scale;
use serde::{Deserialize, Serialize};

/// Open-string notes, 1st (high E) to 6th (low E) - display order
const STRINGS: [PitchClass; 6] = [
    PitchClass::E,
    PitchClass::B,
    PitchClass::G,
    PitchClass::D,
    PitchClass::A,
    PitchClass::E,
];

/// One fret position on one string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FretCell {
    pub fret: usize,
    /// Sharp-family name of the sounding pitch
    pub note: String,
    pub is_scale_note: bool,
    pub is_root: bool,
}

/// One guitar string with all its fret positions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRow {
    /// Open-string note name
    pub string: String,
    pub frets: Vec<FretCell>,
}

/// The whole grid, strings in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FretboardGrid {
    pub strings: Vec<StringRow>,
    pub fret_count: usize,
}

/// Build the fretboard grid for a scale
///
/// Scale membership and root tagging go through pitch-class resolution,
/// so a scale spelled in flats still lights up the sharp-named frets.
///
/// # Arguments
/// * `scale` - The spelled scale to project
/// * `fret_count` - Frets per string (`None` = default 12, capped at 24)
pub fn build_fretboard(scale: &Scale, fret_count: Option<usize>) -> FretboardGrid {
    let fret_count = fret_count.unwrap_or(DEFAULT_FRETS).min(MAX_FRETS);
    let root = PitchClass::parse(scale.root()).unwrap_or(PitchClass::C);

    let scale_pitches: Vec<PitchClass> = scale
        .notes
        .iter()
        .filter_map(|n| PitchClass::parse(n).ok())
        .collect();

    let strings = STRINGS
        .iter()
        .map(|open| {
            let frets = (0..=fret_count)
                .map(|fret| {
                    let pitch = PitchClass::from_index(open.index() + fret);
                    FretCell {
                        fret,
                        note: pitch.to_string(),
                        is_scale_note: scale_pitches.contains(&pitch),
                        is_root: pitch == root,
                    }
                })
                .collect();
            StringRow {
                string: open.to_string(),
                frets,
            }
        })
        .collect();

    FretboardGrid {
        strings,
        fret_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::Key;
    use crate::theory::scale::{get_scale, Mode};

    #[test]
    fn test_grid_dimensions() {
        let scale = get_scale(&Key::parse("C"), Mode::Major);
        let grid = build_fretboard(&scale, None);

        assert_eq!(grid.strings.len(), 6);
        assert_eq!(grid.fret_count, 12);
        for row in &grid.strings {
            assert_eq!(row.frets.len(), 13); // fret 0 through 12
        }
        // Display order: high E first, low E last
        assert_eq!(grid.strings[0].string, "E");
        assert_eq!(grid.strings[1].string, "B");
        assert_eq!(grid.strings[5].string, "E");
    }

    #[test]
    fn test_e_string_fret_8_is_c_root() {
        let scale = get_scale(&Key::parse("C"), Mode::Major);
        let grid = build_fretboard(&scale, None);

        // (4 + 8) % 12 = 0 -> C
        let cell = &grid.strings[0].frets[8];
        assert_eq!(cell.note, "C");
        assert!(cell.is_root);
        assert!(cell.is_scale_note);
    }

    #[test]
    fn test_non_scale_notes_untagged() {
        let scale = get_scale(&Key::parse("C"), Mode::Major);
        let grid = build_fretboard(&scale, None);

        // Open B string, fret 2 -> C#, not in C major
        let cell = &grid.strings[1].frets[2];
        assert_eq!(cell.note, "C#");
        assert!(!cell.is_scale_note);
        assert!(!cell.is_root);
    }

    #[test]
    fn test_flat_scale_matches_sharp_frets() {
        // Eb major contains Bb, which the neck spells A#
        let scale = get_scale(&Key::parse("Eb"), Mode::Major);
        let grid = build_fretboard(&scale, None);

        let a_sharp = grid.strings[0]
            .frets
            .iter()
            .find(|c| c.note == "A#")
            .unwrap();
        assert!(a_sharp.is_scale_note);

        let root = grid.strings[0]
            .frets
            .iter()
            .find(|c| c.note == "D#")
            .unwrap();
        assert!(root.is_root);
    }

    #[test]
    fn test_fret_count_clamped() {
        let scale = get_scale(&Key::parse("C"), Mode::Major);
        let grid = build_fretboard(&scale, Some(99));
        assert_eq!(grid.fret_count, 24);

        let grid = build_fretboard(&scale, Some(5));
        assert_eq!(grid.strings[0].frets.len(), 6);
    }
}
