/// Aggregate scale analysis
///
/// Coordinates the table lookups and derivations into one response
/// value. Every analysis is computed fresh from immutable tables; there
/// is no shared engine state between requests.

use crate::error::Result;
use crate::notes::Key;
use crate::theory::chords::{build_chords, derive_borrowed_chords};
use crate::theory::degrees::{scale_degrees, ScaleDegree};
use crate::theory::dominants::{resolve_secondary_dominants, DominantStrategy, SecondaryDominant};
use crate::theory::progressions::build_progressions;
use crate::theory::scale::{get_scale, Mode, RECOGNIZED_KEYS};
use crate::viz::{build_fretboard, build_keyboard, FretboardGrid, KeyboardOverlay};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the engine derives for one (key, mode) request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleAnalysis {
    pub key: String,
    pub mode: Mode,
    pub scale_name: String,
    pub notes: Vec<String>,
    pub chords: Vec<String>,
    pub borrowed_chords: Vec<String>,
    pub secondary_dominants: Vec<SecondaryDominant>,
    pub progressions: BTreeMap<String, Vec<String>>,
    pub scale_degrees: Vec<ScaleDegree>,
    pub keyboard_overlay: KeyboardOverlay,
    pub fretboard_grid: FretboardGrid,
}

/// Analyze a key and mode with the default (diatonic) dominant strategy
pub fn analyze(key: &str, mode: Mode) -> Result<ScaleAnalysis> {
    analyze_with(key, mode, DominantStrategy::default(), None)
}

/// Analyze with an explicit dominant strategy and fret count
///
/// # Arguments
/// * `key` - Requested key spelling; unresolvable input degrades to C
/// * `mode` - Major or natural minor
/// * `strategy` - Secondary-dominant algorithm
/// * `fret_count` - Frets on the fretboard grid (`None` = default)
pub fn analyze_with(
    key: &str,
    mode: Mode,
    strategy: DominantStrategy,
    fret_count: Option<usize>,
) -> Result<ScaleAnalysis> {
    let key = Key::parse(key);
    let scale = get_scale(&key, mode);

    let chords = build_chords(&scale, mode);
    let borrowed_chords = derive_borrowed_chords(&scale);
    let secondary_dominants = resolve_secondary_dominants(&scale.notes, &chords, strategy)?;
    let progressions = build_progressions(&chords);
    let degrees = scale_degrees(&scale.notes, &chords, mode);
    let keyboard_overlay = build_keyboard(&scale);
    let fretboard_grid = build_fretboard(&scale, fret_count);

    Ok(ScaleAnalysis {
        key: key.spelling().to_string(),
        mode,
        scale_name: scale.name(),
        notes: scale.notes,
        chords,
        borrowed_chords,
        secondary_dominants,
        progressions,
        scale_degrees: degrees,
        keyboard_overlay,
        fretboard_grid,
    })
}

/// The key spellings the engine recognizes
pub fn available_keys() -> Vec<&'static str> {
    RECOGNIZED_KEYS.to_vec()
}
