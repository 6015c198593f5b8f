//! Domain error types shared across the workspace.

use thiserror::Error;

/// Result type alias for domain operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Database-level failures surfaced through storage implementations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("connection pool error: {0}")]
    Pool(String),

    #[error("query failed: {0}")]
    QueryFailed(String),

    #[error("{0}")]
    Internal(String),
}

/// Input validation failures.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("missing required field: {0}")]
    MissingField(String),
}

/// Top-level domain error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Unexpected(String),
}
