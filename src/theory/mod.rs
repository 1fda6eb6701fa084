/// The music-theory engine
///
/// Scale tables, chord building, secondary dominants, borrowed chords,
/// progressions and the aggregate analysis. Everything here is a pure
/// function of (key, mode).

pub mod analysis;
pub mod chords;
pub mod degrees;
pub mod dominants;
pub mod progressions;
pub mod scale;

pub use analysis::{analyze, analyze_with, available_keys, ScaleAnalysis};
pub use chords::{build_chords, derive_borrowed_chords};
pub use degrees::{scale_degrees, tensions, ScaleDegree};
pub use dominants::{
    dominant_for, resolve_secondary_dominants, DominantStrategy, SecondaryDominant,
};
pub use progressions::build_progressions;
pub use scale::{get_scale, Mode, Scale, RECOGNIZED_KEYS};
