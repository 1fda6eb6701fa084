/// Note and enharmonic utilities
///
/// Pitch-class arithmetic over the chromatic circle plus key-spelling
/// validation and chord-root extraction.

pub mod key;
pub mod pitch;

pub use key::{chord_root, chord_root_pitch, Key};
pub use pitch::{PitchClass, CHROMATIC};
