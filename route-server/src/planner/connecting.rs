//! Two-train journeys through a single interchange.
//!
//! This is a bounded enumeration, not a shortest-path search. Candidates
//! are produced lazily in a fixed order:
//!
//! 1. trains calling at the source, in store order;
//! 2. for each, the stops after the source in route order (each one an
//!    interchange, except the destination itself);
//! 3. for each interchange, trains calling at both it and the destination,
//!    in store order.
//!
//! The first `max_connections` combinations whose layover falls inside the
//! configured window are returned. Later combinations are never examined,
//! even if they would be cheaper or faster, and no store queries are
//! issued once the cap is reached.

use std::sync::Arc;
use std::vec;

use tracing::{debug, trace};

use crate::domain::Train;
use crate::timetable::{StoreError, TimetableStore};

use super::config::SearchConfig;
use super::fare::FareCalculator;
use super::leg::{Leg, LegSummary};

/// A two-leg journey joined at one interchange.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub interchange_station: String,
    pub total_price: f64,
    pub layover_minutes: i64,
    pub leg1: LegSummary,
    pub leg2: LegSummary,
}

/// Position on a leg-1 candidate: where the source is, and which stop is
/// the interchange currently being tried.
struct FirstLeg {
    train: Arc<Train>,
    source_idx: usize,
    interchange_idx: usize,
}

impl FirstLeg {
    fn new(train: Arc<Train>, source: &str) -> Option<Self> {
        let source_idx = train.stop_index(source)?;
        Some(Self {
            train,
            source_idx,
            interchange_idx: source_idx,
        })
    }

    /// Step to the next interchange after the source, skipping the
    /// destination. Returns its station name.
    fn advance(&mut self, destination: &str) -> Option<&str> {
        loop {
            self.interchange_idx += 1;
            let stop = self.train.stops().get(self.interchange_idx)?;
            if stop.station_name != destination {
                return Some(&stop.station_name);
            }
        }
    }

    fn interchange(&self) -> &str {
        &self.train.stops()[self.interchange_idx].station_name
    }
}

/// Lazy enumeration of connections in canonical traversal order.
///
/// Yields `Err` at most once, after which it is exhausted.
pub struct ConnectionSearch<'a, S: TimetableStore + ?Sized> {
    store: &'a S,
    config: &'a SearchConfig,
    fares: FareCalculator,
    source: &'a str,
    destination: &'a str,
    first_legs: Option<vec::IntoIter<Arc<Train>>>,
    current: Option<FirstLeg>,
    second_legs: vec::IntoIter<Arc<Train>>,
    finished: bool,
}

impl<'a, S: TimetableStore + ?Sized> ConnectionSearch<'a, S> {
    /// Prepare a search. No store queries are issued until the first
    /// call to `next`.
    pub fn new(
        store: &'a S,
        config: &'a SearchConfig,
        source: &'a str,
        destination: &'a str,
    ) -> Self {
        Self {
            store,
            config,
            fares: FareCalculator::new(config.rate_per_km),
            source,
            destination,
            first_legs: None,
            current: None,
            second_legs: Vec::new().into_iter(),
            finished: false,
        }
    }

    fn advance(&mut self) -> Result<Option<Connection>, StoreError> {
        if self.first_legs.is_none() {
            let trains = self.store.trains_serving(self.source)?;
            trace!(source = self.source, candidates = trains.len(), "Leg-1 candidates");
            self.first_legs = Some(trains.into_iter());
        }

        loop {
            // Leg-2 candidates for the current interchange
            if let Some(second) = self.second_legs.next() {
                if let Some(first) = &self.current {
                    if let Some(connection) = self.connect(first, second) {
                        return Ok(Some(connection));
                    }
                }
                continue;
            }

            // Next interchange on the current leg-1 train
            if let Some(first) = self.current.as_mut() {
                if let Some(interchange) = first.advance(self.destination) {
                    let trains = self
                        .store
                        .trains_serving_all(&[interchange, self.destination])?;
                    self.second_legs = trains.into_iter();
                    continue;
                }
            }

            // Next leg-1 train
            match self.first_legs.as_mut().and_then(Iterator::next) {
                Some(train) => self.current = FirstLeg::new(train, self.source),
                None => return Ok(None),
            }
        }
    }

    /// Join `first` to `second` at the current interchange if the second
    /// train runs on to the destination and the layover fits the window.
    fn connect(&self, first: &FirstLeg, second: Arc<Train>) -> Option<Connection> {
        let interchange = first.interchange();
        let leg2 = Leg::between(second, interchange, self.destination)?;
        let leg1 = Leg::new(first.train.clone(), first.source_idx, first.interchange_idx)?;

        let layover = self
            .config
            .rollover
            .layover(leg1.arrival_time(), leg2.departure_time());
        if !self.config.layover_window().contains(&layover) {
            trace!(
                interchange,
                layover,
                first = %first.train.number(),
                second = %leg2.train().number(),
                "Layover outside window"
            );
            return None;
        }

        let leg1 = leg1.summary(&self.fares);
        let leg2 = leg2.summary(&self.fares);

        Some(Connection {
            interchange_station: interchange.to_string(),
            total_price: leg1.price + leg2.price,
            layover_minutes: layover,
            leg1,
            leg2,
        })
    }
}

impl<S: TimetableStore + ?Sized> Iterator for ConnectionSearch<'_, S> {
    type Item = Result<Connection, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.advance() {
            Ok(Some(connection)) => Some(Ok(connection)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Find up to `config.max_connections` one-change journeys.
///
/// Returns the first ones found in traversal order; see the module docs.
pub fn find_connections<S: TimetableStore + ?Sized>(
    store: &S,
    config: &SearchConfig,
    source: &str,
    destination: &str,
) -> Result<Vec<Connection>, StoreError> {
    let connections = ConnectionSearch::new(store, config, source, destination)
        .take(config.max_connections)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        source,
        destination,
        found = connections.len(),
        capped = connections.len() == config.max_connections,
        "Connection search complete"
    );

    Ok(connections)
}
