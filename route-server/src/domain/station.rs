//! Station types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A short station identifier such as `MAS` or `NDLS`.
///
/// Codes are 2 to 5 uppercase ASCII letters. This type guarantees that any
/// `StationCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use route_server::domain::StationCode;
///
/// let mas = StationCode::parse("MAS").unwrap();
/// assert_eq!(mas.as_str(), "MAS");
///
/// assert!(StationCode::parse("ST").is_ok());
/// assert!(StationCode::parse("PUNE").is_ok());
///
/// assert!(StationCode::parse("mas").is_err());
/// assert!(StationCode::parse("M").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationCode(String);

impl StationCode {
    /// Parse a station code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        if !(2..=5).contains(&s.len()) {
            return Err(InvalidStationCode {
                reason: "must be 2 to 5 characters",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(InvalidStationCode {
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(StationCode(s.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for StationCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StationCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        StationCode::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A station: immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Unique human-readable name, used to reference the station from stops.
    #[serde(rename = "stationName")]
    pub name: String,

    /// Unique short code.
    #[serde(rename = "stationCode")]
    pub code: StationCode,
}

impl Station {
    /// Create a new station.
    pub fn new(name: impl Into<String>, code: StationCode) -> Self {
        Self {
            name: name.into(),
            code,
        }
    }
}
