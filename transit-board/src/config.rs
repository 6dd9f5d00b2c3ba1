//! Application configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::digitransit::{DigitransitConfig, PlanPolling};
use crate::domain::Coordinates;
use crate::parse::CollisionPolicy;

/// Default address for the timeline viewer.
const DEFAULT_LISTEN: &str = "127.0.0.1:3000";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Required variable is unset or empty
    #[error("{0} is not set")]
    Missing(&'static str),

    /// Variable is set but cannot be used
    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Everything one run needs.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Digitransit subscription key (empty when running from mock data)
    pub subscription_key: String,
    /// Endpoint override
    pub base_url: Option<String>,
    /// Stops whose arrivals are printed, in output order
    pub stops: Vec<String>,
    /// Journey origin
    pub home: Coordinates,
    /// Journey destination
    pub destination: Coordinates,
    /// Write the timeline here instead of serving it
    pub timeline_path: Option<PathBuf>,
    /// Viewer address
    pub listen: SocketAddr,
    /// Serve canned responses from this directory instead of the API
    pub mock_dir: Option<PathBuf>,
    /// Handling of arrivals sharing a route short name
    pub collision_policy: CollisionPolicy,
    /// Re-request policy for empty plans
    pub polling: PlanPolling,
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using `lookup` to resolve variable names.
    ///
    /// Variables:
    /// - `DIGITRANSIT_SUBSCRIPTION_KEY` (required unless `TRANSIT_MOCK_DIR` is set)
    /// - `DIGITRANSIT_URL`
    /// - `TRANSIT_STOPS`: comma-separated stop ids
    /// - `TRANSIT_HOME`, `TRANSIT_DESTINATION`: `lat,lon` (required)
    /// - `TRANSIT_TIMELINE_PATH`
    /// - `TRANSIT_LISTEN` (default `127.0.0.1:3000`)
    /// - `TRANSIT_MOCK_DIR`
    /// - `TRANSIT_COLLISION_POLICY`: `last` (default) or `earliest`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mock_dir = get("TRANSIT_MOCK_DIR").map(PathBuf::from);

        let subscription_key = match get("DIGITRANSIT_SUBSCRIPTION_KEY") {
            Some(key) => key,
            None if mock_dir.is_some() => String::new(),
            None => return Err(ConfigError::Missing("DIGITRANSIT_SUBSCRIPTION_KEY")),
        };

        let stops = get("TRANSIT_STOPS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let home = coordinates(&get, "TRANSIT_HOME")?;
        let destination = coordinates(&get, "TRANSIT_DESTINATION")?;

        let listen = get("TRANSIT_LISTEN")
            .unwrap_or_else(|| DEFAULT_LISTEN.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "TRANSIT_LISTEN",
                reason: e.to_string(),
            })?;

        let collision_policy = match get("TRANSIT_COLLISION_POLICY") {
            Some(s) => s.trim().parse::<CollisionPolicy>().map_err(|reason| ConfigError::Invalid {
                name: "TRANSIT_COLLISION_POLICY",
                reason,
            })?,
            None => CollisionPolicy::default(),
        };

        Ok(Self {
            subscription_key,
            base_url: get("DIGITRANSIT_URL"),
            stops,
            home,
            destination,
            timeline_path: get("TRANSIT_TIMELINE_PATH").map(PathBuf::from),
            listen,
            mock_dir,
            collision_policy,
            polling: PlanPolling::default(),
        })
    }

    /// Client configuration for the live API.
    pub fn client_config(&self) -> DigitransitConfig {
        let config = DigitransitConfig::new(&self.subscription_key);
        match &self.base_url {
            Some(url) => config.with_base_url(url),
            None => config,
        }
    }
}

fn coordinates<G>(get: &G, name: &'static str) -> Result<Coordinates, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let value = get(name).ok_or(ConfigError::Missing(name))?;
    Coordinates::parse(&value).map_err(|e| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}
