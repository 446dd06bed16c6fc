//! Train leg type shared by the direct and connecting finders.
//!
//! A `Leg` is one train's contribution to a journey: board at one stop,
//! alight at a later one.

use std::sync::Arc;

use crate::domain::{ClockTime, Stop, Train};

use super::fare::FareCalculator;

/// A station with the time a passenger is there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationTime {
    pub name: String,
    pub time: ClockTime,
}

/// A leg of a journey (one train).
///
/// # Invariants
///
/// - `alight_idx > board_idx` (must travel forward on the train)
/// - Both indices are valid for the train's stops
/// - Departure time exists at the board stop
/// - Arrival time exists at the alight stop
#[derive(Debug, Clone)]
pub struct Leg {
    train: Arc<Train>,
    board_idx: usize,
    alight_idx: usize,
    departure: ClockTime,
    arrival: ClockTime,
}

impl Leg {
    /// Construct a leg, or `None` if the train does not run from
    /// `board_idx` forward to `alight_idx`.
    pub fn new(train: Arc<Train>, board_idx: usize, alight_idx: usize) -> Option<Self> {
        if alight_idx <= board_idx {
            return None;
        }

        let departure = train.stops().get(board_idx)?.departure_time?;
        let arrival = train.stops().get(alight_idx)?.arrival_time?;

        Some(Self {
            train,
            board_idx,
            alight_idx,
            departure,
            arrival,
        })
    }

    /// Construct a leg between two named stations on `train`.
    ///
    /// Returns `None` when either station is missing or they are served in
    /// the wrong order.
    pub fn between(train: Arc<Train>, from: &str, to: &str) -> Option<Self> {
        let board_idx = train.stop_index(from)?;
        let alight_idx = train.stop_index(to)?;
        Self::new(train, board_idx, alight_idx)
    }

    /// Returns the train this leg is on.
    pub fn train(&self) -> &Arc<Train> {
        &self.train
    }

    /// Returns the boarding stop.
    pub fn board_stop(&self) -> &Stop {
        &self.train.stops()[self.board_idx]
    }

    /// Returns the alighting stop.
    pub fn alight_stop(&self) -> &Stop {
        &self.train.stops()[self.alight_idx]
    }

    /// Departure time from the boarding stop.
    pub fn departure_time(&self) -> ClockTime {
        self.departure
    }

    /// Arrival time at the alighting stop.
    pub fn arrival_time(&self) -> ClockTime {
        self.arrival
    }

    /// Stops from boarding to alighting, inclusive.
    pub fn stops(&self) -> &[Stop] {
        &self.train.stops()[self.board_idx..=self.alight_idx]
    }

    /// Kilometres travelled on this leg.
    pub fn distance(&self) -> f64 {
        span_distance(self.stops())
    }

    /// Boarding station and departure time.
    pub fn origin(&self) -> StationTime {
        StationTime {
            name: self.board_stop().station_name.clone(),
            time: self.departure,
        }
    }

    /// Alighting station and arrival time.
    pub fn destination(&self) -> StationTime {
        StationTime {
            name: self.alight_stop().station_name.clone(),
            time: self.arrival,
        }
    }

    /// Summarise the leg with its fare.
    pub fn summary(&self, fares: &FareCalculator) -> LegSummary {
        let distance = self.distance();
        LegSummary {
            train_name: self.train.name().to_string(),
            source: self.origin(),
            destination: self.destination(),
            distance,
            price: fares.price(distance),
        }
    }
}

/// Distance covered by a contiguous run of stops.
///
/// The first stop's own `distance_from_previous` is outside the run and
/// is not counted.
pub fn span_distance(stops: &[Stop]) -> f64 {
    stops
        .iter()
        .skip(1)
        .map(|stop| stop.distance_from_previous)
        .sum()
}

/// One priced leg of a connection.
#[derive(Debug, Clone, PartialEq)]
pub struct LegSummary {
    pub train_name: String,
    pub source: StationTime,
    pub destination: StationTime,
    pub distance: f64,
    pub price: f64,
}
