/// External scale-lookup strategies
///
/// The engine's tables are authoritative, but a scale source can also be
/// an external collaborator that answers with comma-separated note names.
/// Any such source is fallible and slow, so it runs behind a timeout with
/// the deterministic table as the fallback path.

use crate::config::LOOKUP_TIMEOUT_MS;
use crate::error::{Result, TheoryError};
use crate::notes::{Key, PitchClass};
use crate::theory::scale::{get_scale, Mode};
use std::time::Duration;

/// A strategy that can produce the notes of a scale
pub trait ScaleSource {
    /// Look up the 7 spelled notes for a key and mode
    fn lookup(
        &self,
        key: &Key,
        mode: Mode,
    ) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
}

/// The deterministic lookup-table source; never fails, never blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct TableSource;

impl ScaleSource for TableSource {
    async fn lookup(&self, key: &Key, mode: Mode) -> Result<Vec<String>> {
        Ok(get_scale(key, mode).notes)
    }
}

/// Wraps a source with a timeout and degrades to the table on failure
///
/// This is how a remote source is meant to be consumed: a bounded,
/// cancellable call whose failure is invisible to the caller because
/// the table answer takes its place.
#[derive(Debug, Clone)]
pub struct WithFallback<S> {
    inner: S,
    timeout: Duration,
}

impl<S: ScaleSource + Sync> WithFallback<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            timeout: Duration::from_millis(LOOKUP_TIMEOUT_MS),
        }
    }

    pub fn with_timeout(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    /// Look up notes, falling back to the table on error or timeout
    pub async fn lookup(&self, key: &Key, mode: Mode) -> Vec<String> {
        match tokio::time::timeout(self.timeout, self.inner.lookup(key, mode)).await {
            Ok(Ok(notes)) => notes,
            // Source failed or timed out; the table always has an answer
            Ok(Err(_)) | Err(_) => get_scale(key, mode).notes,
        }
    }
}

/// Parse a comma-separated note-name response into spelled notes
///
/// The format external sources were asked for: "C, D, E, F, G, A, B".
/// Every entry must be a valid spelled note and a full scale must have
/// 7 of them.
pub fn parse_note_list(response: &str) -> Result<Vec<String>> {
    let notes: Vec<String> = response
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if notes.len() != 7 {
        return Err(TheoryError::LookupFailed(format!(
            "expected 7 notes, got {}",
            notes.len()
        )));
    }

    for note in &notes {
        PitchClass::parse(note).map_err(|_| TheoryError::LookupFailed(format!(
            "'{}' is not a note name",
            note
        )))?;
    }

    Ok(notes)
}
