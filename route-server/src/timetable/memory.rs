//! In-memory timetable loaded from a JSON seed file.
//!
//! The seed file holds `{ "stations": [...], "trains": [...] }` in the
//! shape produced by the offline seeding process. Train order in the file
//! is the store order reported by every query.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Station, Train};

use super::error::StoreError;
use super::store::TimetableStore;

/// Seed data as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimetableData {
    pub stations: Vec<Station>,
    pub trains: Vec<Train>,
}

/// Immutable timetable held in memory.
///
/// Keeps a station → train index so membership queries don't scan every
/// route.
#[derive(Debug)]
pub struct InMemoryTimetable {
    /// Sorted by name.
    stations: Vec<Station>,
    trains: Vec<Arc<Train>>,
    /// Station name → positions in `trains`, ascending.
    serving: HashMap<String, Vec<usize>>,
}

impl InMemoryTimetable {
    /// Build a timetable, checking cross-record consistency.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Invalid` if station names or codes repeat, if
    /// train numbers repeat, or if a stop references an unknown station.
    pub fn new(mut stations: Vec<Station>, trains: Vec<Train>) -> Result<Self, StoreError> {
        let mut names = HashSet::new();
        let mut codes = HashSet::new();
        for station in &stations {
            if !names.insert(station.name.as_str()) {
                return Err(StoreError::Invalid(format!(
                    "duplicate station name {}",
                    station.name
                )));
            }
            if !codes.insert(station.code.as_str()) {
                return Err(StoreError::Invalid(format!(
                    "duplicate station code {}",
                    station.code
                )));
            }
        }

        let mut numbers = HashSet::new();
        let mut serving: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, train) in trains.iter().enumerate() {
            if !numbers.insert(train.number().as_str()) {
                return Err(StoreError::Invalid(format!(
                    "duplicate train number {}",
                    train.number()
                )));
            }
            for stop in train.stops() {
                if !names.contains(stop.station_name.as_str()) {
                    return Err(StoreError::Invalid(format!(
                        "train {} calls at unknown station {}",
                        train.number(),
                        stop.station_name
                    )));
                }
                serving
                    .entry(stop.station_name.clone())
                    .or_default()
                    .push(idx);
            }
        }

        stations.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self {
            stations,
            trains: trains.into_iter().map(Arc::new).collect(),
            serving,
        })
    }

    /// Build a timetable from parsed seed data.
    pub fn from_data(data: TimetableData) -> Result<Self, StoreError> {
        Self::new(data.stations, data.trains)
    }

    /// Parse seed data from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let data: TimetableData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    /// Load seed data from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let timetable = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            stations = timetable.station_count(),
            trains = timetable.train_count(),
            "Loaded timetable"
        );
        Ok(timetable)
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of trains.
    pub fn train_count(&self) -> usize {
        self.trains.len()
    }

    fn serving_indices(&self, station: &str) -> &[usize] {
        self.serving.get(station).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl TimetableStore for InMemoryTimetable {
    fn stations(&self) -> Result<Vec<Station>, StoreError> {
        Ok(self.stations.clone())
    }

    fn trains_serving(&self, station: &str) -> Result<Vec<Arc<Train>>, StoreError> {
        Ok(self
            .serving_indices(station)
            .iter()
            .map(|&idx| self.trains[idx].clone())
            .collect())
    }

    fn trains_serving_all(&self, stations: &[&str]) -> Result<Vec<Arc<Train>>, StoreError> {
        let Some((first, rest)) = stations.split_first() else {
            return Ok(Vec::new());
        };

        Ok(self
            .serving_indices(first)
            .iter()
            .map(|&idx| &self.trains[idx])
            .filter(|train| rest.iter().all(|name| train.serves(name)))
            .cloned()
            .collect())
    }
}
