//! Train and stop types.
//!
//! A `Train` is a directed sequence of stops. Its invariants are checked
//! once in [`Train::new`] (and when deserializing seed data), so search
//! code can index into the stop list without re-validating.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ClockTime, DomainError};

/// Globally unique train identifier, e.g. `"12627"`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrainNumber(String);

impl TrainNumber {
    /// Parse a train number. Blank numbers are rejected.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Empty("train number"));
        }
        Ok(TrainNumber(trimmed.to_string()))
    }

    /// Returns the number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TrainNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TrainNumber::parse(&value)
    }
}

impl From<TrainNumber> for String {
    fn from(value: TrainNumber) -> Self {
        value.0
    }
}

impl fmt::Debug for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainNumber({})", self.0)
    }
}

impl fmt::Display for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One stop on a train's route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// Name of the station served.
    pub station_name: String,

    /// 1-based position along the route.
    pub sequence: u32,

    /// Arrival time; absent only on the first stop.
    #[serde(default)]
    pub arrival_time: Option<ClockTime>,

    /// Departure time; absent only on the last stop.
    #[serde(default)]
    pub departure_time: Option<ClockTime>,

    /// Kilometres from the preceding stop (0 for the first stop).
    #[serde(default)]
    pub distance_from_previous: f64,
}

impl Stop {
    /// Create a stop.
    pub fn new(
        station_name: impl Into<String>,
        sequence: u32,
        arrival_time: Option<ClockTime>,
        departure_time: Option<ClockTime>,
        distance_from_previous: f64,
    ) -> Self {
        Self {
            station_name: station_name.into(),
            sequence,
            arrival_time,
            departure_time,
            distance_from_previous,
        }
    }
}

/// A train: a name, a unique number, and an ordered route.
///
/// # Invariants
///
/// - At least two stops
/// - `sequence` is exactly `1..=N` in list order
/// - No station appears twice
/// - First stop has no arrival and zero distance; last stop has no departure;
///   every intermediate stop has both times
/// - Distances are finite and non-negative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTrain")]
pub struct Train {
    #[serde(rename = "trainName")]
    name: String,
    #[serde(rename = "trainNumber")]
    number: TrainNumber,
    #[serde(rename = "route")]
    stops: Vec<Stop>,
}

/// Unvalidated wire shape of a train.
#[derive(Deserialize)]
struct RawTrain {
    #[serde(rename = "trainName")]
    name: String,
    #[serde(rename = "trainNumber")]
    number: TrainNumber,
    #[serde(rename = "route")]
    stops: Vec<Stop>,
}

impl TryFrom<RawTrain> for Train {
    type Error = DomainError;

    fn try_from(raw: RawTrain) -> Result<Self, Self::Error> {
        Train::new(raw.name, raw.number, raw.stops)
    }
}

impl Train {
    /// Construct a train, validating its route.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_server::domain::{ClockTime, Stop, Train, TrainNumber};
    ///
    /// let t = |s| ClockTime::parse_hhmm(s).ok();
    /// let train = Train::new(
    ///     "Express".to_string(),
    ///     TrainNumber::parse("101").unwrap(),
    ///     vec![
    ///         Stop::new("Chennai", 1, None, t("10:00"), 0.0),
    ///         Stop::new("Bangalore", 2, t("13:00"), None, 250.0),
    ///     ],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(train.stop_index("Bangalore"), Some(1));
    /// ```
    pub fn new(name: String, number: TrainNumber, stops: Vec<Stop>) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Empty("train name"));
        }
        if stops.len() < 2 {
            return Err(DomainError::TooFewStops(number.to_string()));
        }

        let last = stops.len() - 1;
        let mut seen = HashSet::new();

        for (idx, stop) in stops.iter().enumerate() {
            let position = idx as u32 + 1;
            let station = &stop.station_name;

            if station.trim().is_empty() {
                return Err(DomainError::Empty("station name"));
            }
            if stop.sequence != position {
                return Err(DomainError::SequenceMismatch {
                    position,
                    found: stop.sequence,
                });
            }
            if !seen.insert(station.as_str()) {
                return Err(DomainError::RepeatedStation(station.clone()));
            }

            let distance = stop.distance_from_previous;
            if !distance.is_finite() || distance < 0.0 || (idx == 0 && distance != 0.0) {
                return Err(DomainError::InvalidDistance(station.clone()));
            }

            match (idx == 0, stop.arrival_time.is_some()) {
                (true, true) => return Err(unexpected(station, "arrival")),
                (false, false) => return Err(missing(station, "arrival")),
                _ => {}
            }
            match (idx == last, stop.departure_time.is_some()) {
                (true, true) => return Err(unexpected(station, "departure")),
                (false, false) => return Err(missing(station, "departure")),
                _ => {}
            }
        }

        Ok(Self {
            name,
            number,
            stops,
        })
    }

    /// Returns the train's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the train number.
    pub fn number(&self) -> &TrainNumber {
        &self.number
    }

    /// Returns the stops in route order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Index of the stop serving `station`, if any.
    pub fn stop_index(&self, station: &str) -> Option<usize> {
        self.stops.iter().position(|s| s.station_name == station)
    }

    /// Whether this train calls at `station`.
    pub fn serves(&self, station: &str) -> bool {
        self.stop_index(station).is_some()
    }
}

fn missing(station: &str, which: &'static str) -> DomainError {
    DomainError::MissingTime {
        station: station.to_string(),
        which,
    }
}

fn unexpected(station: &str, which: &'static str) -> DomainError {
    DomainError::UnexpectedTime {
        station: station.to_string(),
        which,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Option<ClockTime> {
        Some(ClockTime::parse_hhmm(s).unwrap())
    }

    fn number(s: &str) -> TrainNumber {
        TrainNumber::parse(s).unwrap()
    }

    fn three_stops() -> Vec<Stop> {
        vec![
            Stop::new("Chennai", 1, None, t("10:00"), 0.0),
            Stop::new("Vellore", 2, t("11:00"), t("11:15"), 100.0),
            Stop::new("Bangalore", 3, t("13:00"), None, 150.0),
        ]
    }

    #[test]
    fn valid_train() {
        let train = Train::new("A".into(), number("1"), three_stops()).unwrap();
        assert_eq!(train.name(), "A");
        assert_eq!(train.number().as_str(), "1");
        assert_eq!(train.stops().len(), 3);
        assert_eq!(train.stop_index("Vellore"), Some(1));
        assert!(train.serves("Bangalore"));
        assert!(!train.serves("Mysuru"));
    }

    #[test]
    fn rejects_single_stop() {
        let stops = vec![Stop::new("Chennai", 1, None, None, 0.0)];
        assert_eq!(
            Train::new("A".into(), number("1"), stops),
            Err(DomainError::TooFewStops("1".into()))
        );
    }

    #[test]
    fn rejects_sequence_gap() {
        let mut stops = three_stops();
        stops[2].sequence = 4;
        assert_eq!(
            Train::new("A".into(), number("1"), stops),
            Err(DomainError::SequenceMismatch {
                position: 3,
                found: 4
            })
        );
    }

    #[test]
    fn rejects_revisit() {
        let mut stops = three_stops();
        stops[2].station_name = "Chennai".into();
        assert_eq!(
            Train::new("A".into(), number("1"), stops),
            Err(DomainError::RepeatedStation("Chennai".into()))
        );
    }

    #[test]
    fn rejects_bad_distances() {
        let mut stops = three_stops();
        stops[0].distance_from_previous = 5.0;
        assert!(matches!(
            Train::new("A".into(), number("1"), stops),
            Err(DomainError::InvalidDistance(_))
        ));

        let mut stops = three_stops();
        stops[1].distance_from_previous = -1.0;
        assert!(matches!(
            Train::new("A".into(), number("1"), stops),
            Err(DomainError::InvalidDistance(_))
        ));

        let mut stops = three_stops();
        stops[1].distance_from_previous = f64::NAN;
        assert!(Train::new("A".into(), number("1"), stops).is_err());
    }

    #[test]
    fn rejects_misplaced_times() {
        let mut stops = three_stops();
        stops[0].arrival_time = t("09:55");
        assert!(matches!(
            Train::new("A".into(), number("1"), stops),
            Err(DomainError::UnexpectedTime { which: "arrival", .. })
        ));

        let mut stops = three_stops();
        stops[2].departure_time = t("13:05");
        assert!(matches!(
            Train::new("A".into(), number("1"), stops),
            Err(DomainError::UnexpectedTime {
                which: "departure",
                ..
            })
        ));

        let mut stops = three_stops();
        stops[1].departure_time = None;
        assert!(matches!(
            Train::new("A".into(), number("1"), stops),
            Err(DomainError::MissingTime {
                which: "departure",
                ..
            })
        ));
    }

    #[test]
    fn rejects_blank_fields() {
        assert!(TrainNumber::parse("  ").is_err());
        assert_eq!(
            Train::new(" ".into(), number("1"), three_stops()),
            Err(DomainError::Empty("train name"))
        );
    }

    #[test]
    fn deserializes_seed_shape() {
        let json = serde_json::json!({
            "trainName": "Train 1",
            "trainNumber": "1",
            "route": [
                { "stationName": "Chennai", "sequence": 1, "arrivalTime": null,
                  "departureTime": "10:00", "distanceFromPrevious": 0 },
                { "stationName": "Bangalore", "sequence": 2, "arrivalTime": "13:00",
                  "departureTime": null, "distanceFromPrevious": 250 }
            ]
        });

        let train: Train = serde_json::from_value(json).unwrap();
        assert_eq!(train.name(), "Train 1");
        assert_eq!(train.stops()[1].distance_from_previous, 250.0);
        assert_eq!(train.stops()[1].arrival_time, t("13:00"));
    }

    #[test]
    fn deserialize_validates() {
        let json = serde_json::json!({
            "trainName": "Loop",
            "trainNumber": "2",
            "route": [
                { "stationName": "Chennai", "sequence": 1, "departureTime": "10:00" },
                { "stationName": "Chennai", "sequence": 2, "arrivalTime": "11:00",
                  "distanceFromPrevious": 10 }
            ]
        });

        let err = serde_json::from_value::<Train>(json).unwrap_err();
        assert!(err.to_string().contains("visited more than once"));
    }
}
