//! Search configuration for the route planner.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::domain::{ClockTime, MINUTES_PER_DAY};

/// How to compute a layover when the onward train's clock time is earlier
/// than the arrival clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoverPolicy {
    /// Plain minute-of-day subtraction. A departure that is numerically
    /// earlier than the arrival gives a negative layover, which the
    /// window always rejects.
    #[default]
    SameDay,

    /// Treat a departure earlier than the arrival as the next day's.
    NextDay,
}

impl LayoverPolicy {
    /// Minutes between arriving at and departing from an interchange.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_server::domain::ClockTime;
    /// use route_server::planner::LayoverPolicy;
    ///
    /// let arrive = ClockTime::parse_hhmm("23:50").unwrap();
    /// let depart = ClockTime::parse_hhmm("00:40").unwrap();
    ///
    /// assert_eq!(LayoverPolicy::SameDay.layover(arrive, depart), -1390);
    /// assert_eq!(LayoverPolicy::NextDay.layover(arrive, depart), 50);
    /// ```
    pub fn layover(self, arrival: ClockTime, departure: ClockTime) -> i64 {
        let minutes = departure.minutes_since(arrival);
        match self {
            LayoverPolicy::SameDay => minutes,
            LayoverPolicy::NextDay if minutes < 0 => minutes + MINUTES_PER_DAY,
            LayoverPolicy::NextDay => minutes,
        }
    }
}

/// Error returned when parsing an unknown layover policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layover policy {0:?} (expected \"same-day\" or \"next-day\")")]
pub struct InvalidLayoverPolicy(String);

impl FromStr for LayoverPolicy {
    type Err = InvalidLayoverPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "same-day" => Ok(LayoverPolicy::SameDay),
            "next-day" => Ok(LayoverPolicy::NextDay),
            _ => Err(InvalidLayoverPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for LayoverPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoverPolicy::SameDay => f.write_str("same-day"),
            LayoverPolicy::NextDay => f.write_str("next-day"),
        }
    }
}

/// Error returned by [`SearchConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid search config: {0}")]
pub struct InvalidSearchConfig(&'static str);

/// Configuration parameters for route search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Fare per kilometre, in currency units.
    pub rate_per_km: f64,

    /// Shortest acceptable layover at an interchange (minutes, inclusive).
    pub min_layover_mins: i64,

    /// Longest acceptable layover at an interchange (minutes, inclusive).
    pub max_layover_mins: i64,

    /// Connection enumeration stops once this many have been found.
    pub max_connections: usize,

    /// Midnight handling for layovers.
    pub rollover: LayoverPolicy,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        rate_per_km: f64,
        min_layover_mins: i64,
        max_layover_mins: i64,
        max_connections: usize,
        rollover: LayoverPolicy,
    ) -> Self {
        Self {
            rate_per_km,
            min_layover_mins,
            max_layover_mins,
            max_connections,
            rollover,
        }
    }

    /// Returns the accepted layover range.
    pub fn layover_window(&self) -> RangeInclusive<i64> {
        self.min_layover_mins..=self.max_layover_mins
    }

    /// Check the parameters are usable.
    pub fn validate(&self) -> Result<(), InvalidSearchConfig> {
        if !self.rate_per_km.is_finite() || self.rate_per_km < 0.0 {
            return Err(InvalidSearchConfig(
                "rate per km must be finite and non-negative",
            ));
        }
        if self.min_layover_mins > self.max_layover_mins {
            return Err(InvalidSearchConfig(
                "minimum layover exceeds maximum layover",
            ));
        }
        if self.max_connections == 0 {
            return Err(InvalidSearchConfig("max connections must be at least 1"));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            rate_per_km: 1.25,
            min_layover_mins: 45,
            max_layover_mins: 360, // 6 hours
            max_connections: 10,
            rollover: LayoverPolicy::SameDay,
        }
    }
}
