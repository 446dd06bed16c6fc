//! Timetable store error types.

use std::path::PathBuf;

/// Errors raised by a timetable store.
///
/// Any of these abandons the search that triggered it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Seed file could not be read
    #[error("failed to read timetable {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Seed data is not valid JSON or breaks a record invariant
    #[error("malformed timetable data: {0}")]
    Json(#[from] serde_json::Error),

    /// Records are individually valid but inconsistent with each other
    #[error("inconsistent timetable: {0}")]
    Invalid(String),

    /// Backing store cannot be queried
    #[error("timetable unavailable: {0}")]
    Unavailable(String),
}
