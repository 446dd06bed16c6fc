//! The store interface the search engine queries.

use std::sync::Arc;

use crate::domain::{Station, Train};

use super::error::StoreError;

/// Read-only timetable queries.
///
/// This abstraction keeps the search engine independent of the storage
/// technology and allows it to be tested with mock data. Implementations
/// must return trains in a stable "store order": repeated queries against
/// unchanged data yield the same trains in the same order.
pub trait TimetableStore {
    /// All stations, sorted by name.
    fn stations(&self) -> Result<Vec<Station>, StoreError>;

    /// Every train whose route calls at `station`, in store order.
    fn trains_serving(&self, station: &str) -> Result<Vec<Arc<Train>>, StoreError>;

    /// Every train whose route calls at all of `stations`, in store order.
    ///
    /// An empty `stations` slice matches nothing.
    fn trains_serving_all(&self, stations: &[&str]) -> Result<Vec<Arc<Train>>, StoreError>;
}

impl<S: TimetableStore + ?Sized> TimetableStore for Arc<S> {
    fn stations(&self) -> Result<Vec<Station>, StoreError> {
        (**self).stations()
    }

    fn trains_serving(&self, station: &str) -> Result<Vec<Arc<Train>>, StoreError> {
        (**self).trains_serving(station)
    }

    fn trains_serving_all(&self, stations: &[&str]) -> Result<Vec<Arc<Train>>, StoreError> {
        (**self).trains_serving_all(stations)
    }
}
