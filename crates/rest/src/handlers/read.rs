//! Get-by-identity handler.
//!
//! `GET [base]/patient/get/{id}`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use demographics_persistence::PatientStorage;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::PatientIdPath;
use crate::state::AppState;

/// Handler for the get interaction.
///
/// A missing record is not an error: the response is `200 OK` with an
/// empty body.
///
/// # Response
///
/// - `200 OK` - The record as JSON, or an empty body if absent
/// - `400 Bad Request` - The identity is not numeric
/// - `500 Internal Server Error` - The store failed
///
/// # Example
///
/// ```http
/// GET /patient/get/1 HTTP/1.1
/// Accept: application/json
/// ```
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    PatientIdPath(id): PatientIdPath,
) -> RestResult<Response>
where
    S: PatientStorage + Send + Sync,
{
    debug!(id = %id, "Processing get request");

    let patient = state
        .storage()
        .find_by_id(id)
        .await
        .map_err(RestError::internal)?;

    match patient {
        Some(patient) => Ok((StatusCode::OK, Json(patient)).into_response()),
        None => {
            debug!(id = %id, "Patient not found, returning empty body");
            Ok(StatusCode::OK.into_response())
        }
    }
}
