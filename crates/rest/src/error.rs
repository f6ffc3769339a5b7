//! Error types for the REST API.
//!
//! Handlers translate storage outcomes into a [`RestError`] explicitly, per
//! operation, because the same storage error maps to different statuses
//! depending on the interaction:
//!
//! | Operation | not found | unique violation | other storage error |
//! |-----------|-----------|------------------|---------------------|
//! | list | - | - | 500 |
//! | get | 200, empty body | - | 500 |
//! | create | - | 409 | 400 |
//! | update | 404 | 500 | 500 |
//! | delete | 404 | - | 500 |
//!
//! Error responses carry only a status code. The cause is logged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use demographics_persistence::PatientId;
use std::fmt;

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Patient not found (HTTP 404).
    NotFound {
        /// The identity that was looked up.
        id: PatientId,
    },

    /// The write would break a uniqueness rule (HTTP 409).
    Conflict {
        /// Message describing the conflict.
        message: String,
    },

    /// Bad request (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },

    /// The storage backend cannot serve requests (HTTP 503).
    ServiceUnavailable {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Builds a 400 error from any displayable cause.
    pub fn bad_request(cause: impl fmt::Display) -> Self {
        RestError::BadRequest {
            message: cause.to_string(),
        }
    }

    /// Builds a 500 error from any displayable cause.
    pub fn internal(cause: impl fmt::Display) -> Self {
        RestError::InternalError {
            message: cause.to_string(),
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::Conflict { .. } => StatusCode::CONFLICT,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { id } => write!(f, "Patient not found: {}", id),
            RestError::Conflict { message } => write!(f, "Conflict: {}", message),
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
            RestError::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        status.into_response()
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RestError::NotFound {
            id: PatientId::new(123),
        };
        assert_eq!(err.to_string(), "Patient not found: 123");
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                RestError::NotFound {
                    id: PatientId::new(1),
                },
                StatusCode::NOT_FOUND,
            ),
            (
                RestError::Conflict {
                    message: "dup".to_string(),
                },
                StatusCode::CONFLICT,
            ),
            (RestError::bad_request("nope"), StatusCode::BAD_REQUEST),
            (RestError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
            (
                RestError::ServiceUnavailable {
                    message: "down".to_string(),
                },
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status_code(), expected);
        }
    }

    #[tokio::test]
    async fn test_error_response_has_empty_body() {
        let response = RestError::internal("database exploded").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }
}
