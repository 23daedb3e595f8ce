//! Store error types.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the song store
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite or pool failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem failure while preparing the database location
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
