//! Storage error types.
//!
//! Used by the roster repository and callers of storage APIs.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),
    #[error("Store used after close")]
    Closed,
}

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolClosed => StorageError::Closed,
            other => StorageError::Database(other),
        }
    }
}
