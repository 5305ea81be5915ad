//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::backend::DEFAULT_LATENCY;

/// Address variable, e.g. `0.0.0.0:8080`.
pub const ADDR_VAR: &str = "TRIP_PLANNER_ADDR";
/// Directory served under `/static`.
pub const STATIC_DIR_VAR: &str = "TRIP_PLANNER_STATIC_DIR";
/// Path of the credential file.
pub const CREDENTIALS_VAR: &str = "TRIP_PLANNER_CREDENTIALS";
/// Artificial backend delay in milliseconds.
pub const LATENCY_VAR: &str = "TRIP_PLANNER_LATENCY_MS";
/// Optional RNG seed for reproducible plans.
pub const SEED_VAR: &str = "TRIP_PLANNER_SEED";

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {var}: {reason}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: String,
}

/// Settings for the web server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub static_dir: PathBuf,
    pub credentials_path: PathBuf,
    pub latency: Duration,
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from("static"),
            credentials_path: PathBuf::from("data/credentials.json"),
            latency: DEFAULT_LATENCY,
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through a variable lookup.
    ///
    /// Unset or empty variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(ADDR_VAR) {
            config.addr = parse(ADDR_VAR, &value)?;
        }
        if let Some(value) = get(STATIC_DIR_VAR) {
            config.static_dir = PathBuf::from(value);
        }
        if let Some(value) = get(CREDENTIALS_VAR) {
            config.credentials_path = PathBuf::from(value);
        }
        if let Some(value) = get(LATENCY_VAR) {
            config.latency = Duration::from_millis(parse(LATENCY_VAR, &value)?);
        }
        if let Some(value) = get(SEED_VAR) {
            config.seed = Some(parse(SEED_VAR, &value)?);
        }

        Ok(config)
    }
}

fn parse<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError {
        var,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
