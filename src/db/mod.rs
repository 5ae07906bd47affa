//! Database layer - connection pool, schema, and the store object
//!
//! # Design Principles
//!
//! - Connection pool with bounded idle lifetime - no shared single connection
//! - One parameterized statement per operation - no cross-call transactions
//! - Arrays bind as native TEXT[] parameters - never interpolated into SQL

pub mod pool;
pub mod schema;
pub mod store;

pub use pool::{create_pool, create_pool_with_options};
pub use schema::ensure_schema;
pub use store::Store;
