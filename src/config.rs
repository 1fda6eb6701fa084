/// Engine configuration constants
///
/// Central place for the fixed dimensions of the instrument grids and
/// the diatonic scale itself.

/// Number of degrees in a diatonic scale
pub const SCALE_LENGTH: usize = 7;

/// Default number of frets rendered on the fretboard grid
pub const DEFAULT_FRETS: usize = 12;

/// Maximum number of frets the grid will render (full 24-fret neck)
pub const MAX_FRETS: usize = 24;

/// Timeout for external scale lookups before falling back to the tables
pub const LOOKUP_TIMEOUT_MS: u64 = 5_000;
