//! Store configuration - environment loading
//!
//! Connection settings come from environment variables (a `.env` file is
//! honored when present):
//! - `DATABASE_IP`: backend host
//! - `DATABASE_PORT`: backend port
//! - `DATABASE_USERNAME`, `DATABASE_PASSWORD`: credentials
//! - `DATABASE_NAME`: database to connect to
//!
//! All five are required; a missing or unparsable value fails at
//! construction time, never at first query.

use std::time::Duration;

use crate::error::{Result, StoreError};

/// Idle lifetime applied to pooled connections when none is configured.
pub const DEFAULT_IDLE_LIFETIME: Duration = Duration::from_secs(5);

/// Connection settings for the log store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    /// How long a pooled connection may sit unused before it is recycled.
    pub idle_lifetime: Duration,
}

impl StoreConfig {
    /// Create config with explicit connection settings (for testing and
    /// embedding callers that do their own configuration)
    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            username: username.into(),
            password: password.into(),
            database: database.into(),
            idle_lifetime: DEFAULT_IDLE_LIFETIME,
        }
    }

    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let port: u16 = require("DATABASE_PORT")?.parse().map_err(|_| {
            StoreError::config("DATABASE_PORT is not a valid port number")
        })?;

        Ok(Self {
            host: require("DATABASE_IP")?,
            port,
            username: require("DATABASE_USERNAME")?,
            password: require("DATABASE_PASSWORD")?,
            database: require("DATABASE_NAME")?,
            idle_lifetime: DEFAULT_IDLE_LIFETIME,
        })
    }

    /// Override the idle-connection lifetime
    pub fn with_idle_lifetime(mut self, idle_lifetime: Duration) -> Self {
        self.idle_lifetime = idle_lifetime;
        self
    }
}

fn require(key: &'static str) -> Result<String> {
    std::env::var(key).map_err(|_| StoreError::config(format!("{} is not set", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_config_uses_default_idle_lifetime() {
        let config = StoreConfig::new("localhost", 5432, "qa", "secret", "qa_logs");
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.idle_lifetime, DEFAULT_IDLE_LIFETIME);
    }

    #[test]
    fn idle_lifetime_can_be_overridden() {
        let config = StoreConfig::new("localhost", 5432, "qa", "secret", "qa_logs")
            .with_idle_lifetime(Duration::from_secs(30));
        assert_eq!(config.idle_lifetime, Duration::from_secs(30));
    }

    #[test]
    fn missing_variable_is_named_in_error() {
        let err = require("QALOG_STORE_UNSET_TEST_VAR").unwrap_err();
        assert_eq!(
            err.to_string(),
            "configuration error: QALOG_STORE_UNSET_TEST_VAR is not set"
        );
    }
}
