//! Error types for the persistence layer.
//!
//! Errors are grouped by what went wrong: the record is missing, a table
//! constraint rejected the write, the record failed validation before it
//! reached the database, or the database itself failed.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::types::PatientId;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Record state errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Table constraint errors
    #[error(transparent)]
    Integrity(#[from] IntegrityError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl StorageError {
    /// Returns true if the write was rejected by a uniqueness constraint.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Integrity(IntegrityError::UniqueViolation { .. })
        )
    }

    /// Returns true if the addressed record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::Resource(ResourceError::NotFound { .. }))
    }
}

/// Errors related to record state.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The requested patient was not found.
    #[error("patient not found: {id}")]
    NotFound { id: PatientId },

    /// The operation needs a persisted patient but got one without identity.
    #[error("patient has no identity, it was never saved")]
    Unsaved,
}

/// Errors raised by table constraints.
#[derive(Error, Debug)]
pub enum IntegrityError {
    /// A unique constraint would be broken by the write.
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    /// Any other constraint (NOT NULL, CHECK) rejected the write.
    #[error("constraint violated: {message}")]
    ConstraintViolation { message: String },
}

/// Errors raised before a record reaches the database.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: String },
}

/// Errors originating from the database backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is currently unavailable.
    #[error("backend unavailable: {backend_name}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Connection pool exhausted.
    #[error("connection pool exhausted for {backend_name}")]
    PoolExhausted { backend_name: String },

    /// Schema migration error.
    #[error("schema migration failed: {message}")]
    MigrationError { message: String },

    /// Query execution error.
    #[error("query execution failed: {message}")]
    QueryError { message: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        use rusqlite::ffi;

        if let rusqlite::Error::SqliteFailure(code, message) = &err {
            match code.extended_code {
                ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                    // "UNIQUE constraint failed: patients.date_of_birth"
                    let constraint = message
                        .as_deref()
                        .and_then(|m| m.split_once("failed: "))
                        .map(|(_, columns)| columns.to_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    return StorageError::Integrity(IntegrityError::UniqueViolation {
                        constraint,
                    });
                }
                ffi::SQLITE_CONSTRAINT_NOTNULL | ffi::SQLITE_CONSTRAINT_CHECK => {
                    return StorageError::Integrity(IntegrityError::ConstraintViolation {
                        message: err.to_string(),
                    });
                }
                _ => {}
            }
        }

        StorageError::Backend(BackendError::Internal {
            backend_name: "sqlite".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        })
    }
}

#[cfg(feature = "sqlite")]
impl From<r2d2::Error> for StorageError {
    fn from(_err: r2d2::Error) -> Self {
        StorageError::Backend(BackendError::PoolExhausted {
            backend_name: "sqlite".to_string(),
        })
    }
}

#[cfg(feature = "postgres")]
impl From<tokio_postgres::Error> for StorageError {
    fn from(err: tokio_postgres::Error) -> Self {
        use tokio_postgres::error::SqlState;

        if let Some(db_error) = err.as_db_error() {
            if *db_error.code() == SqlState::UNIQUE_VIOLATION {
                return StorageError::Integrity(IntegrityError::UniqueViolation {
                    constraint: db_error.constraint().unwrap_or("unknown").to_string(),
                });
            }
            if *db_error.code() == SqlState::NOT_NULL_VIOLATION
                || *db_error.code() == SqlState::CHECK_VIOLATION
            {
                return StorageError::Integrity(IntegrityError::ConstraintViolation {
                    message: db_error.message().to_string(),
                });
            }
        }

        StorageError::Backend(BackendError::Internal {
            backend_name: "postgres".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        })
    }
}

#[cfg(feature = "postgres")]
impl From<deadpool_postgres::PoolError> for StorageError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        StorageError::Backend(BackendError::ConnectionFailed {
            backend_name: "postgres".to_string(),
            message: err.to_string(),
        })
    }
}
