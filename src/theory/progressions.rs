/// Common chord-progression catalog
///
/// Named progressions assembled from the built chord list by fixed
/// scale-degree index sequences.

use std::collections::BTreeMap;

/// The catalog: name -> scale-degree indices (0-indexed)
const PROGRESSIONS: [(&str, &[usize]); 5] = [
    ("I-V-vi-IV", &[0, 4, 5, 3]),
    ("vi-IV-I-V", &[5, 3, 0, 4]),
    ("I-vi-ii-V", &[0, 5, 1, 4]),
    ("I-IV-vi-V", &[0, 3, 5, 4]),
    ("ii-V-I", &[1, 4, 0]),
];

/// Chords a key needs before the catalog applies
const MIN_CHORDS: usize = 6;

/// Assemble the named progressions for a chord list
///
/// Needs at least 6 chords (the highest degree the catalog references
/// is the submediant); fewer than that returns an empty map rather
/// than an error.
pub fn build_progressions(chords: &[String]) -> BTreeMap<String, Vec<String>> {
    if chords.len() < MIN_CHORDS {
        return BTreeMap::new();
    }

    PROGRESSIONS
        .iter()
        .map(|(name, degrees)| {
            let sequence = degrees.iter().map(|&i| chords[i].clone()).collect();
            (name.to_string(), sequence)
        })
        .collect()
}
