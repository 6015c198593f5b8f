//! Storage error types and conversions into core errors.

use thiserror::Error;

use verdant_core::errors::{DatabaseError, Error, ValidationError};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database query failed: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("migration failed: {0}")]
    Migration(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            // Unique-key violations are caller mistakes (duplicate email,
            // duplicate catalog entry), not storage faults.
            StorageError::Query(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                info,
            )) => Error::Validation(ValidationError::InvalidInput(info.message().to_string())),
            StorageError::Query(e) => Error::Database(DatabaseError::QueryFailed(e.to_string())),
            StorageError::Pool(e) => Error::Database(DatabaseError::Pool(e.to_string())),
            StorageError::Migration(message) => Error::Database(DatabaseError::Internal(message)),
        }
    }
}
