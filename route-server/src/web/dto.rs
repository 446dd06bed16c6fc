//! Data transfer objects for web requests and responses.
//!
//! Field names are camelCase on the wire. Prices and distances are sent
//! unrounded.

use serde::{Deserialize, Serialize};

use crate::planner::{Connection, DirectRoute, LegSummary, SearchResult, StationTime};

/// Query parameters for route search.
///
/// Both fields are optional here so that a missing parameter is reported
/// as a validation error rather than an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Source station name
    pub source: Option<String>,

    /// Destination station name
    pub destination: Option<String>,
}

/// A station and the time the passenger is there.
#[derive(Debug, Serialize)]
pub struct StationTimeResult {
    pub name: String,

    /// "HH:MM"
    pub time: String,
}

impl StationTimeResult {
    fn from_station_time(st: &StationTime) -> Self {
        Self {
            name: st.name.clone(),
            time: st.time.to_string(),
        }
    }
}

/// A direct train.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectRouteResult {
    pub train_name: String,
    pub train_number: String,
    pub source: StationTimeResult,
    pub destination: StationTimeResult,

    /// Kilometres
    pub distance: f64,
    pub price: f64,
}

impl DirectRouteResult {
    /// Build from a domain route.
    pub fn from_route(route: &DirectRoute) -> Self {
        Self {
            train_name: route.train_name.clone(),
            train_number: route.train_number.to_string(),
            source: StationTimeResult::from_station_time(&route.source),
            destination: StationTimeResult::from_station_time(&route.destination),
            distance: route.distance,
            price: route.price,
        }
    }
}

/// One leg of a connection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegResult {
    pub train_name: String,
    pub source: StationTimeResult,
    pub destination: StationTimeResult,
    pub price: f64,
}

impl LegResult {
    fn from_leg(leg: &LegSummary) -> Self {
        Self {
            train_name: leg.train_name.clone(),
            source: StationTimeResult::from_station_time(&leg.source),
            destination: StationTimeResult::from_station_time(&leg.destination),
            price: leg.price,
        }
    }
}

/// A one-change journey.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionResult {
    pub interchange_station: String,
    pub total_price: f64,

    /// Minutes between the two trains
    pub layover_duration: i64,
    pub leg1: LegResult,
    pub leg2: LegResult,
}

impl ConnectionResult {
    /// Build from a domain connection.
    pub fn from_connection(connection: &Connection) -> Self {
        Self {
            interchange_station: connection.interchange_station.clone(),
            total_price: connection.total_price,
            layover_duration: connection.layover_minutes,
            leg1: LegResult::from_leg(&connection.leg1),
            leg2: LegResult::from_leg(&connection.leg2),
        }
    }
}

/// Response for route search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub direct: Vec<DirectRouteResult>,
    pub connections: Vec<ConnectionResult>,
    pub message: String,
}

impl SearchResponse {
    /// Build from a search result.
    pub fn from_result(result: &SearchResult) -> Self {
        Self {
            direct: result
                .direct
                .iter()
                .map(DirectRouteResult::from_route)
                .collect(),
            connections: result
                .connections
                .iter()
                .map(ConnectionResult::from_connection)
                .collect(),
            message: result.message.clone(),
        }
    }
}

/// Error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
