//! Delete handler.
//!
//! `DELETE [base]/patient/delete/{id}`

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use demographics_persistence::PatientStorage;
use tracing::{debug, info};

use crate::error::{RestError, RestResult};
use crate::extractors::PatientIdPath;
use crate::state::AppState;

/// Handler for the delete interaction.
///
/// # Response
///
/// - `200 OK` - Deleted, empty body
/// - `400 Bad Request` - The identity is not numeric
/// - `404 Not Found` - No record has that identity
/// - `500 Internal Server Error` - The store failed
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    PatientIdPath(id): PatientIdPath,
) -> RestResult<Response>
where
    S: PatientStorage + Send + Sync,
{
    debug!(id = %id, "Processing delete request");

    let patient = state
        .storage()
        .find_by_id(id)
        .await
        .map_err(RestError::internal)?
        .ok_or(RestError::NotFound { id })?;

    state
        .storage()
        .delete(&patient)
        .await
        .map_err(RestError::internal)?;

    info!(id = %id, "Deleted patient");

    Ok(StatusCode::OK.into_response())
}
