//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits and a bounded idle
//! lifetime so unused connections are recycled.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};

/// Default maximum connections for the pool.
/// Kept low; every store operation is one short round trip.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool from store configuration.
///
/// # Errors
///
/// Returns [`StoreError::Connection`] if the backend is unreachable or
/// rejects the credentials.
pub async fn create_pool(config: &StoreConfig) -> Result<PgPool> {
    create_pool_with_options(config, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a pool with a custom connection limit.
pub async fn create_pool_with_options(
    config: &StoreConfig,
    max_connections: u32,
) -> Result<PgPool> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.username)
        .password(&config.password)
        .database(&config.database);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .idle_timeout(config.idle_lifetime)
        .connect_with(options)
        .await
        .map_err(StoreError::connection)
}
