/// Instrument-visualization data builders
///
/// Pure projections of scale data onto keyboard and fretboard grids.
/// Rendering is somebody else's job.

pub mod fretboard;
pub mod keyboard;

pub use fretboard::{build_fretboard, FretCell, FretboardGrid, StringRow};
pub use keyboard::{build_keyboard, KeyCell, KeyboardOverlay};
