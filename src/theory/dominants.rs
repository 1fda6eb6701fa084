/// Secondary-dominant resolution
///
/// For every scale degree, the dominant-seventh chord that resolves to
/// it. Two algorithms exist for picking the dominant root and they do
/// not agree; they are kept as named strategies with `Diatonic` as the
/// canonical default.

use crate::error::{Result, TheoryError};
use crate::notes::{chord_root_pitch, PitchClass};
use serde::{Deserialize, Serialize};

/// A dominant-seventh chord and the diatonic chord it resolves to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryDominant {
    pub seventh: String,
    pub resolves_to: String,
}

/// How the dominant root is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DominantStrategy {
    /// Three diatonic steps back in scale-degree space; degree 6 (the
    /// leading-tone chord) is a named exception that resolves from the
    /// dominant degree instead. Canonical.
    Diatonic,
    /// Seven semitones down on the chromatic circle from the target
    /// root, spelled sharp-family. Kept for comparison; disagrees with
    /// the diatonic rule.
    Chromatic,
}

impl Default for DominantStrategy {
    fn default() -> Self {
        DominantStrategy::Diatonic
    }
}

/// Resolve the secondary dominant for every chord, order preserved
///
/// # Arguments
/// * `notes` - The derived diatonic scale notes
/// * `chords` - The built diatonic chords, index-aligned with `notes`
/// * `strategy` - Which dominant-root algorithm to apply
///
/// # Returns
/// * `Ok(Vec<SecondaryDominant>)` - One entry per chord
/// * `Err(TheoryError::NotYetComputed)` - If notes/chords are missing
///   or not index-aligned (generate them first)
pub fn resolve_secondary_dominants(
    notes: &[String],
    chords: &[String],
    strategy: DominantStrategy,
) -> Result<Vec<SecondaryDominant>> {
    if notes.is_empty() || chords.is_empty() || notes.len() != chords.len() {
        return Err(TheoryError::NotYetComputed);
    }

    chords
        .iter()
        .enumerate()
        .map(|(i, chord)| {
            let seventh = match strategy {
                DominantStrategy::Diatonic => diatonic_seventh(notes, i),
                DominantStrategy::Chromatic => chromatic_seventh(chord)?,
            };
            Ok(SecondaryDominant {
                seventh,
                resolves_to: chord.clone(),
            })
        })
        .collect()
}

/// Resolve the dominant seventh for one chord index
pub fn dominant_for(
    notes: &[String],
    chords: &[String],
    index: usize,
    strategy: DominantStrategy,
) -> Result<String> {
    if notes.is_empty() || chords.is_empty() || notes.len() != chords.len() {
        return Err(TheoryError::NotYetComputed);
    }
    if index >= chords.len() {
        return Err(TheoryError::ChordIndexOutOfRange {
            index,
            len: chords.len(),
        });
    }

    match strategy {
        DominantStrategy::Diatonic => Ok(diatonic_seventh(notes, index)),
        DominantStrategy::Chromatic => chromatic_seventh(&chords[index]),
    }
}

/// Three steps back in the scale; the leading-tone chord resolves from
/// the dominant degree
fn diatonic_seventh(notes: &[String], degree: usize) -> String {
    let source = if degree == 6 { 4 } else { (degree + 7 - 3) % 7 };
    format!("{}7", notes[source])
}

/// Seven semitones down from the target root, sharp-family spelling
fn chromatic_seventh(chord: &str) -> Result<String> {
    let root = chord_root_pitch(chord)?;
    let dominant: PitchClass = root.transpose(-7);
    Ok(format!("{}7", dominant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::Key;
    use crate::theory::chords::build_chords;
    use crate::theory::scale::{get_scale, Mode};

    fn g_major() -> (Vec<String>, Vec<String>) {
        let scale = get_scale(&Key::parse("G"), Mode::Major);
        let chords = build_chords(&scale, Mode::Major);
        (scale.notes, chords)
    }

    #[test]
    fn test_diatonic_three_steps_back() {
        let (notes, chords) = g_major();
        let doms =
            resolve_secondary_dominants(&notes, &chords, DominantStrategy::Diatonic).unwrap();

        assert_eq!(doms.len(), 7);
        // Tonic G: source degree (0-3+7)%7 = 4 -> D7
        assert_eq!(doms[0].seventh, "D7");
        assert_eq!(doms[0].resolves_to, "G");
    }

    #[test]
    fn test_leading_tone_exception() {
        let (notes, chords) = g_major();
        let doms =
            resolve_secondary_dominants(&notes, &chords, DominantStrategy::Diatonic).unwrap();

        // Degree 6 resolves from the dominant degree, not the generic rule
        assert_eq!(doms[6].resolves_to, chords[6]);
        assert_eq!(doms[6].seventh, format!("{}7", notes[4]));
        assert_eq!(doms[6].resolves_to, "F#dim");
    }

    #[test]
    fn test_resolves_to_keeps_quality_suffix() {
        let (notes, chords) = g_major();
        let doms =
            resolve_secondary_dominants(&notes, &chords, DominantStrategy::Diatonic).unwrap();
        assert_eq!(doms[1].resolves_to, "Am");
        assert_eq!(doms[5].resolves_to, "Em");
    }

    #[test]
    fn test_strategies_disagree() {
        // The chromatic rule steps *down* a fifth from the target, so for
        // C it lands on F7 where the diatonic rule says G7. This is the
        // documented divergence between the two algorithms.
        let scale = get_scale(&Key::parse("C"), Mode::Major);
        let chords = build_chords(&scale, Mode::Major);

        let diatonic =
            resolve_secondary_dominants(&scale.notes, &chords, DominantStrategy::Diatonic).unwrap();
        let chromatic =
            resolve_secondary_dominants(&scale.notes, &chords, DominantStrategy::Chromatic)
                .unwrap();

        assert_eq!(diatonic[0].seventh, "G7");
        assert_eq!(chromatic[0].seventh, "F7");
        assert_ne!(diatonic, chromatic);
    }

    #[test]
    fn test_chromatic_handles_flat_roots() {
        let scale = get_scale(&Key::parse("Eb"), Mode::Major);
        let chords = build_chords(&scale, Mode::Major);
        let doms =
            resolve_secondary_dominants(&scale.notes, &chords, DominantStrategy::Chromatic)
                .unwrap();
        // Eb sounds D#; 7 semitones down is G#
        assert_eq!(doms[0].seventh, "G#7");
    }

    #[test]
    fn test_precondition_errors() {
        let (notes, chords) = g_major();

        let err = resolve_secondary_dominants(&[], &chords, DominantStrategy::Diatonic);
        assert!(matches!(err, Err(TheoryError::NotYetComputed)));

        let err = resolve_secondary_dominants(&notes, &[], DominantStrategy::Diatonic);
        assert!(matches!(err, Err(TheoryError::NotYetComputed)));
    }

    #[test]
    fn test_dominant_for_bounds() {
        let (notes, chords) = g_major();

        let seventh = dominant_for(&notes, &chords, 1, DominantStrategy::Diatonic).unwrap();
        assert_eq!(seventh, "E7");

        let err = dominant_for(&notes, &chords, 9, DominantStrategy::Diatonic);
        assert!(matches!(
            err,
            Err(TheoryError::ChordIndexOutOfRange { index: 9, len: 7 })
        ));
    }
}
