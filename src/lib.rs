/// keywise library
///
/// Diatonic music-theory engine: enharmonically-correct scales, triad
/// qualities, secondary dominants, borrowed chords, progressions and
/// instrument-grid projections, all as pure functions of (key, mode).

pub mod config;
pub mod error;
pub mod lookup;
pub mod notes;
pub mod theory;
pub mod viz;

// Re-exports for convenience
pub use error::{Result, TheoryError};
pub use notes::Key;
pub use theory::{analyze, Mode, ScaleAnalysis};
