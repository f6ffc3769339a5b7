//! Update handler.
//!
//! `PUT [base]/patient/update/{id}`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use demographics_persistence::PatientStorage;
use tracing::{debug, info};

use crate::error::{RestError, RestResult};
use crate::extractors::{PatientBody, PatientIdPath};
use crate::state::AppState;

/// Handler for the update interaction.
///
/// Replaces all six demographic fields of an existing record. The identity
/// comes from the path; any `id` in the body is ignored.
///
/// # Response
///
/// - `200 OK` - The updated record
/// - `400 Bad Request` - Non-numeric identity or malformed JSON body
/// - `404 Not Found` - No record has that identity
/// - `500 Internal Server Error` - Lookup or save failed, including
///   uniqueness and required-field rejections
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    PatientIdPath(id): PatientIdPath,
    PatientBody(fields): PatientBody,
) -> RestResult<Response>
where
    S: PatientStorage + Send + Sync,
{
    debug!(id = %id, "Processing update request");

    let mut patient = state
        .storage()
        .find_by_id(id)
        .await
        .map_err(RestError::internal)?
        .ok_or(RestError::NotFound { id })?;

    patient.apply(fields);

    let saved = state
        .storage()
        .save(patient)
        .await
        .map_err(RestError::internal)?;

    info!(id = %id, "Updated patient");

    Ok((StatusCode::OK, Json(saved)).into_response())
}
