//! Route search engine.
//!
//! This module answers: "which trains get me from this station to that
//! one?" It finds single-train journeys and one-change journeys through an
//! interchange, prices them at a flat per-kilometre rate, and bounds the
//! connection search so it terminates quickly on large timetables.
//!
//! Results are not ranked. Ordering follows the store and the traversal
//! order described in [`connecting`](self::connecting).

mod config;
pub mod connecting;
mod direct;
mod fare;
mod leg;
mod search;

pub use config::{InvalidLayoverPolicy, InvalidSearchConfig, LayoverPolicy, SearchConfig};
pub use connecting::{Connection, ConnectionSearch, find_connections};
pub use direct::{DirectRoute, find_direct_routes};
pub use fare::FareCalculator;
pub use leg::{Leg, LegSummary, StationTime, span_distance};
pub use search::{ROUTES_FOUND, RoutePlanner, SearchError, SearchRequest, SearchResult};
