//! Structured error types for the log store.
//!
//! Uses `thiserror` for better API surface and error composition.
//! Binary callers can still wrap these in `anyhow` for convenience.

use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Main error type for the data-access layer
///
/// Nothing is retried or swallowed internally; each variant carries the
/// table or setting involved, the correlation id where one is available,
/// and the underlying backend error.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Required configuration is missing or invalid
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// Pool could not be established or a connection lease failed
    #[error("database connection failed: {source}")]
    Connection { source: sqlx::Error },

    /// DDL execution failed during schema initialization
    #[error("schema initialization failed: {source}")]
    Schema { source: sqlx::Error },

    /// An insert violated a constraint, mismatched a column type, or
    /// lost its connection mid-statement
    #[error("insert into {table} failed for session {session}: {source}",
        session = .uuid_number.as_deref().unwrap_or("<none>"))]
    Write {
        table: &'static str,
        uuid_number: Option<String>,
        source: sqlx::Error,
    },

    /// A select failed to execute
    #[error("read from {table} failed: {source}")]
    Read {
        table: &'static str,
        source: sqlx::Error,
    },
}

impl StoreError {
    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create a connection error
    pub fn connection(source: sqlx::Error) -> Self {
        Self::Connection { source }
    }

    /// Create a schema error
    pub fn schema(source: sqlx::Error) -> Self {
        Self::Schema { source }
    }

    /// Create a write error for the given table
    pub fn write(table: &'static str, uuid_number: Option<&str>, source: sqlx::Error) -> Self {
        Self::Write {
            table,
            uuid_number: uuid_number.map(str::to_owned),
            source,
        }
    }

    /// Create a read error for the given table
    pub fn read(table: &'static str, source: sqlx::Error) -> Self {
        Self::Read { table, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::config("DATABASE_IP is not set");
        assert_eq!(
            err.to_string(),
            "configuration error: DATABASE_IP is not set"
        );

        let err = StoreError::write("qa_logs", Some("abc-123"), sqlx::Error::PoolClosed);
        assert!(err.to_string().contains("qa_logs"));
        assert!(err.to_string().contains("abc-123"));

        let err = StoreError::write("questions", None, sqlx::Error::PoolClosed);
        assert!(err.to_string().contains("<none>"));

        let err = StoreError::read("questions", sqlx::Error::RowNotFound);
        assert!(err.to_string().contains("read from questions"));
    }
}
