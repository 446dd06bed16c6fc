//! Timetable storage.
//!
//! The search engine only sees the [`TimetableStore`] trait; the bundled
//! implementation keeps seed data in memory.

mod error;
mod memory;
mod store;

pub use error::StoreError;
pub use memory::{InMemoryTimetable, TimetableData};
pub use store::TimetableStore;
