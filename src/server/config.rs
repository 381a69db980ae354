/**
 * Server Configuration
 *
 * Configuration is read from the environment exactly once, at startup,
 * into an immutable `AppConfig`. Nothing re-reads the environment at
 * request time.
 *
 * # Variables
 *
 * - `JWT_SECRET` - token signing secret, REQUIRED; startup fails without it
 * - `DATABASE_URL` - SQLite database URL, default `sqlite:notekeeper.db`
 * - `SERVER_PORT` - listen port, default 3000
 * - `TOKEN_TTL_SECS` - token lifetime, default 30 days
 */

use thiserror::Error;

use crate::auth::tokens::DEFAULT_TOKEN_TTL_SECS;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The token signing secret is missing or empty
    #[error("JWT_SECRET is not set")]
    MissingJwtSecret,

    /// A variable was set but could not be parsed
    #[error("invalid {name}: {value}")]
    InvalidValue {
        /// Variable name
        name: &'static str,
        /// The unparseable value
        value: String,
    },
}

/// Immutable process-wide configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite database URL
    pub database_url: String,
    /// Token signing secret
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub token_ttl_secs: u64,
    /// HTTP listen port
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite:notekeeper.db".to_string());

        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                value: raw,
            })?,
            None => 3000,
        };

        let token_ttl_secs = match lookup("TOKEN_TTL_SECS") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "TOKEN_TTL_SECS",
                value: raw,
            })?,
            None => DEFAULT_TOKEN_TTL_SECS,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            token_ttl_secs,
            port,
        })
    }
}
