//! Server configuration from environment variables.
//!
//! Every setting has a default, so the server starts with no environment
//! at all. Unparseable values are errors rather than silently ignored.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::planner::{InvalidSearchConfig, SearchConfig};

/// Error building configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable could not be parsed
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    /// Search parameters are inconsistent
    #[error(transparent)]
    Search(#[from] InvalidSearchConfig),
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// TCP port to listen on.
    pub port: u16,

    /// Path of the JSON timetable seed file.
    pub timetable_path: PathBuf,

    /// Route search parameters.
    pub search: SearchConfig,

    /// Result cache parameters.
    pub cache: CacheConfig,

    /// Deadline for a single search request.
    pub search_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            timetable_path: PathBuf::from("data/timetable.json"),
            search: SearchConfig::default(),
            cache: CacheConfig::default(),
            search_timeout: Duration::from_secs(10),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's
    /// value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let env = Env(lookup);

        let search = SearchConfig {
            rate_per_km: env.parse("SEARCH_RATE_PER_KM", defaults.search.rate_per_km)?,
            min_layover_mins: env.parse(
                "SEARCH_MIN_LAYOVER_MINS",
                defaults.search.min_layover_mins,
            )?,
            max_layover_mins: env.parse(
                "SEARCH_MAX_LAYOVER_MINS",
                defaults.search.max_layover_mins,
            )?,
            max_connections: env.parse(
                "SEARCH_MAX_CONNECTIONS",
                defaults.search.max_connections,
            )?,
            rollover: env.parse("SEARCH_ROLLOVER", defaults.search.rollover)?,
        };
        search.validate()?;

        let cache = CacheConfig {
            ttl: Duration::from_secs(
                env.parse("CACHE_TTL_SECS", defaults.cache.ttl.as_secs())?,
            ),
            max_capacity: env.parse("CACHE_MAX_CAPACITY", defaults.cache.max_capacity)?,
        };

        Ok(Self {
            port: env.parse("PORT", defaults.port)?,
            timetable_path: env
                .get("TIMETABLE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.timetable_path),
            search,
            cache,
            search_timeout: Duration::from_secs(
                env.parse("SEARCH_TIMEOUT_SECS", defaults.search_timeout.as_secs())?,
            ),
        })
    }
}

struct Env<F>(F);

impl<F: Fn(&str) -> Option<String>> Env<F> {
    fn get(&self, var: &str) -> Option<String> {
        (self.0)(var).filter(|v| !v.trim().is_empty())
    }

    fn parse<T>(&self, var: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(var) {
            None => Ok(default),
            Some(value) => value
                .trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::Invalid {
                    var,
                    value,
                    reason: e.to_string(),
                }),
        }
    }
}
