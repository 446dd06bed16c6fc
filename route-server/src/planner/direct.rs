//! Single-train journeys.

use tracing::debug;

use crate::domain::TrainNumber;
use crate::timetable::{StoreError, TimetableStore};

use super::fare::FareCalculator;
use super::leg::{Leg, StationTime};

/// A single train covering source and destination in order.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectRoute {
    pub train_name: String,
    pub train_number: TrainNumber,
    pub source: StationTime,
    pub destination: StationTime,
    pub distance: f64,
    pub price: f64,
}

impl DirectRoute {
    /// Price a leg as a complete journey.
    pub fn from_leg(leg: &Leg, fares: &FareCalculator) -> Self {
        let distance = leg.distance();
        Self {
            train_name: leg.train().name().to_string(),
            train_number: leg.train().number().clone(),
            source: leg.origin(),
            destination: leg.destination(),
            distance,
            price: fares.price(distance),
        }
    }
}

/// Find every train running from `source` to `destination`.
///
/// Trains that call at both stations but reach `destination` first are
/// skipped: routes are directed. Results follow store order and are not
/// capped.
pub fn find_direct_routes<S: TimetableStore + ?Sized>(
    store: &S,
    fares: &FareCalculator,
    source: &str,
    destination: &str,
) -> Result<Vec<DirectRoute>, StoreError> {
    let trains = store.trains_serving_all(&[source, destination])?;
    let candidates = trains.len();

    let routes: Vec<DirectRoute> = trains
        .into_iter()
        .filter_map(|train| Leg::between(train, source, destination))
        .map(|leg| DirectRoute::from_leg(&leg, fares))
        .collect();

    debug!(
        source,
        destination,
        candidates,
        found = routes.len(),
        "Direct search complete"
    );

    Ok(routes)
}
