//! Domain error types.
//!
//! These errors represent validation failures in timetable data. They are
//! raised when records are built, so the search engine never sees a train
//! that breaks its invariants.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A train needs at least an origin and a terminus
    #[error("train {0} must have at least two stops")]
    TooFewStops(String),

    /// Stop sequence numbers are not exactly 1..N in list order
    #[error("stop {position} has sequence {found}, expected {position}")]
    SequenceMismatch { position: u32, found: u32 },

    /// The same station appears twice on one train
    #[error("station {0} is visited more than once")]
    RepeatedStation(String),

    /// A stop is missing a time it must have
    #[error("stop at {station} is missing its {which} time")]
    MissingTime { station: String, which: &'static str },

    /// A stop carries a time it must not have
    #[error("stop at {station} must not have a {which} time")]
    UnexpectedTime { station: String, which: &'static str },

    /// Distance is negative, non-finite, or non-zero on the first stop
    #[error("invalid distance at {0}")]
    InvalidDistance(String),

    /// Required text field is blank
    #[error("{0} must not be empty")]
    Empty(&'static str),
}
