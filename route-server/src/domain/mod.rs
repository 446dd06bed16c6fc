//! Domain types for the route search engine.
//!
//! This module contains the core domain model types that represent
//! validated timetable data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod error;
mod station;
mod time;
mod train;

pub use error::DomainError;
pub use station::{InvalidStationCode, Station, StationCode};
pub use time::{ClockTime, MINUTES_PER_DAY, TimeError};
pub use train::{Stop, Train, TrainNumber};
