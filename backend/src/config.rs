//! Environment-driven configuration.
//!
//! Every setting has a default so a bare `cargo run` works locally. Lookups go
//! through a caller-supplied function; [`ApiConfig::load`] and
//! [`DatabaseConfig::load`] plug in the process environment.

use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use tracing::{info, warn};

pub const BIND_ADDRESS_VAR: &str = "CONTOSO_BIND_ADDRESS";
pub const DATABASE_URL_VAR: &str = "CONTOSO_DATABASE_URL";
pub const ALLOWED_ORIGINS_VAR: &str = "CONTOSO_ALLOWED_ORIGINS";
pub const STATIC_DIR_VAR: &str = "CONTOSO_STATIC_DIR";

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";
const DEFAULT_DATABASE_URL: &str = "sqlite:contoso.db";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173,https://localhost:5173";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("{key} must not be empty")]
    Empty { key: String },
}

/// Where the database lives; shared by the API and the migration worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
}

impl DatabaseConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url: String = try_load(&lookup, DATABASE_URL_VAR, DEFAULT_DATABASE_URL)?;
        if url.trim().is_empty() {
            return Err(ConfigError::Empty {
                key: DATABASE_URL_VAR.to_string(),
            });
        }
        Ok(Self { url })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_address: SocketAddr,
    pub database: DatabaseConfig,
    /// Origins allowed by CORS, e.g. the dev server of the frontend
    pub allowed_origins: Vec<String>,
    /// Built frontend to serve for unmatched paths
    pub static_dir: Option<PathBuf>,
}

impl ApiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = try_load(&lookup, BIND_ADDRESS_VAR, DEFAULT_BIND_ADDRESS)?;
        let database = DatabaseConfig::from_lookup(&lookup)?;

        let origins: String = try_load(&lookup, ALLOWED_ORIGINS_VAR, DEFAULT_ALLOWED_ORIGINS)?;
        let allowed_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let static_dir = lookup(STATIC_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_address,
            database,
            allowed_origins,
            static_dir,
        })
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::InvalidValue {
            key: key.to_string(),
            reason: e.to_string(),
        }
    })
}
