//! Custom error types for the common library
//!
//! This module defines the store-level error type shared by the services.

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred during database connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// A write was rejected because it would violate a uniqueness constraint
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Error occurred during database migration
    #[error("Database migration error: {0}")]
    Migration(String),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

impl DatabaseError {
    /// Classify a query error, turning unique violations into [`DatabaseError::Conflict`].
    pub fn from_query(err: SqlxError) -> Self {
        let unique_violation = err
            .as_database_error()
            .map(|db_err| db_err.is_unique_violation())
            .unwrap_or(false);

        if unique_violation {
            let detail = err
                .as_database_error()
                .and_then(|db_err| db_err.constraint().map(str::to_string))
                .unwrap_or_else(|| "unique constraint".to_string());
            DatabaseError::Conflict(detail)
        } else {
            DatabaseError::Query(err)
        }
    }

    /// Whether this error is a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, DatabaseError::Conflict(_))
    }
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_stay_query_errors() {
        let err = DatabaseError::from_query(SqlxError::RowNotFound);
        assert!(matches!(err, DatabaseError::Query(SqlxError::RowNotFound)));
        assert!(!err.is_conflict());
    }

    #[test]
    fn conflict_is_reported() {
        let err = DatabaseError::Conflict("users_username_key".to_string());
        assert!(err.is_conflict());
        assert_eq!(err.to_string(), "Conflict: users_username_key");
    }
}
