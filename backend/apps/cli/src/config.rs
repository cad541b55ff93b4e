//! CLI Configuration
//!
//! Read from the process environment after `.env` has been loaded.

use std::env;
use std::time::Duration;

use kernel::error::app_error::{AppResult, ResultExt};
use kernel::error::kind::ErrorKind;

/// Management CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// PostgreSQL connection string (`DATABASE_URL`)
    pub database_url: String,
    /// Pool size (`DATABASE_MAX_CONNECTIONS`)
    pub max_connections: u32,
    /// How long to wait for a pooled connection (`DATABASE_ACQUIRE_TIMEOUT_SECS`)
    pub acquire_timeout: Duration,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            database_url: "postgres://localhost/accounts".to_string(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(10),
        }
    }
}

impl CliConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Build from any key lookup; missing optional keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL")
            .map_app_err(ErrorKind::BadRequest, "DATABASE_URL must be set in environment")?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value.trim().parse::<u32>()?,
            Err(_) => defaults.max_connections,
        };

        let acquire_timeout = match lookup("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            Ok(value) => Duration::from_secs(value.trim().parse::<u64>()?),
            Err(_) => defaults.acquire_timeout,
        };

        Ok(Self {
            database_url,
            max_connections,
            acquire_timeout,
        })
    }
}
