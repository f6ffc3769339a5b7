//! Patient identity path extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use demographics_persistence::PatientId;

use crate::error::RestError;

/// Axum extractor for the `{id}` path segment.
///
/// A segment that is not a 64-bit integer is rejected with 400 and an
/// empty body, like every other error response.
///
/// # Example
///
/// ```rust,ignore
/// use demographics_rest::extractors::PatientIdPath;
///
/// async fn handler(PatientIdPath(id): PatientIdPath) {
///     println!("Patient {}", id);
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PatientIdPath(pub PatientId);

impl<S> FromRequestParts<S> for PatientIdPath
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::bad_request(format!("Invalid path: {}", e)))?;

        raw.parse::<PatientId>()
            .map(PatientIdPath)
            .map_err(|e| RestError::bad_request(format!("Invalid patient id '{}': {}", raw, e)))
    }
}
