/// Diatonic triad qualities and borrowed chords
///
/// A chord here is a scale-degree root with a quality suffix attached:
/// "" for major, "m" for minor, "dim" for diminished.

use crate::theory::scale::{Mode, Scale};

/// Triad quality suffix per degree: I ii iii IV V vi vii°
const MAJOR_QUALITIES: [&str; 7] = ["", "m", "m", "", "", "m", "dim"];

/// Triad quality suffix per degree: i ii° III iv v VI VII
const MINOR_QUALITIES: [&str; 7] = ["m", "dim", "", "m", "m", "", ""];

/// Scale degrees (0-indexed) that take the parallel-mode substitute
const BORROWED_DEGREES: [usize; 3] = [0, 3, 4];

/// Quality template for a mode
pub fn qualities(mode: Mode) -> &'static [&'static str; 7] {
    match mode {
        Mode::Major => &MAJOR_QUALITIES,
        Mode::Minor => &MINOR_QUALITIES,
    }
}

/// Build the diatonic triads for a scale
///
/// Index-aligned with the scale: chord i is `scale[i] + quality[i]`.
/// A scale shorter than 7 degrees truncates the template.
pub fn build_chords(scale: &Scale, mode: Mode) -> Vec<String> {
    let template = qualities(mode);
    scale
        .notes
        .iter()
        .zip(template.iter())
        .map(|(note, quality)| format!("{}{}", note, quality))
        .collect()
}

/// Derive the borrowed (modal-mixture) chords for a scale
///
/// Substitutes the parallel-mode chord at the tonic, subdominant and
/// dominant degrees by attaching a minor suffix to those roots; the
/// remaining degrees keep a plain root.
pub fn derive_borrowed_chords(scale: &Scale) -> Vec<String> {
    scale
        .notes
        .iter()
        .enumerate()
        .map(|(i, note)| {
            if BORROWED_DEGREES.contains(&i) {
                format!("{}m", note)
            } else {
                note.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::Key;
    use crate::theory::scale::get_scale;

    #[test]
    fn test_c_major_triads() {
        let scale = get_scale(&Key::parse("C"), Mode::Major);
        let chords = build_chords(&scale, Mode::Major);
        assert_eq!(chords, ["C", "Dm", "Em", "F", "G", "Am", "Bdim"]);
    }

    #[test]
    fn test_a_minor_triads() {
        let scale = get_scale(&Key::parse("A"), Mode::Minor);
        let chords = build_chords(&scale, Mode::Minor);
        assert_eq!(chords, ["Am", "Bdim", "C", "Dm", "Em", "F", "G"]);
    }

    #[test]
    fn test_seventh_degree_quality() {
        // Index 6 is always "dim" in major, plain in minor
        for key in ["C", "F#", "Eb", "B"] {
            let major = get_scale(&Key::parse(key), Mode::Major);
            let chords = build_chords(&major, Mode::Major);
            assert_eq!(chords.len(), 7);
            assert!(chords[6].ends_with("dim"), "{:?}", chords);

            let minor = get_scale(&Key::parse(key), Mode::Minor);
            let chords = build_chords(&minor, Mode::Minor);
            assert!(!chords[6].ends_with("m") && !chords[6].ends_with("dim"));
        }
    }

    #[test]
    fn test_short_scale_truncates_template() {
        let mut scale = get_scale(&Key::parse("C"), Mode::Major);
        scale.notes.truncate(5);
        let chords = build_chords(&scale, Mode::Major);
        assert_eq!(chords, ["C", "Dm", "Em", "F", "G"]);
    }

    #[test]
    fn test_borrowed_chords_fixed_degrees() {
        let scale = get_scale(&Key::parse("C"), Mode::Major);
        let borrowed = derive_borrowed_chords(&scale);
        assert_eq!(borrowed, ["Cm", "D", "E", "Fm", "Gm", "A", "B"]);
    }

    #[test]
    fn test_borrowed_chords_length_matches_scale() {
        let scale = get_scale(&Key::parse("F#"), Mode::Minor);
        assert_eq!(derive_borrowed_chords(&scale).len(), scale.len());
    }
}
