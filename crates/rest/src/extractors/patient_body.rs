//! JSON patient body extractor.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use demographics_persistence::PatientFields;

use crate::error::RestError;

/// Axum extractor for a full replacement record.
///
/// Parses the body as JSON into [`PatientFields`]. Missing fields default to
/// empty, and any `id` in the body is ignored. Blank required fields are left
/// for the store to reject.
#[derive(Debug)]
pub struct PatientBody(pub PatientFields);

/// Error type for body extraction failures.
#[derive(Debug)]
pub enum PatientBodyRejection {
    /// The body could not be read.
    Unreadable(String),
    /// The body is not a JSON patient record.
    InvalidJson(String),
}

impl IntoResponse for PatientBodyRejection {
    fn into_response(self) -> Response {
        let error = match self {
            PatientBodyRejection::Unreadable(msg) => {
                RestError::bad_request(format!("Unreadable body: {}", msg))
            }
            PatientBodyRejection::InvalidJson(msg) => {
                RestError::bad_request(format!("Invalid JSON: {}", msg))
            }
        };
        error.into_response()
    }
}

impl<S> FromRequest<S> for PatientBody
where
    S: Send + Sync,
{
    type Rejection = PatientBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| PatientBodyRejection::Unreadable(e.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(PatientBody)
            .map_err(|e| PatientBodyRejection::InvalidJson(e.to_string()))
    }
}
