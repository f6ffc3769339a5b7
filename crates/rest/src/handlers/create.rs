//! Create handler.
//!
//! `POST [base]/patient/add?family=..&given=..&dob=..&sex=..&address=..&phone=..`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use demographics_persistence::{Patient, PatientStorage};
use tracing::{debug, info};

use crate::error::{RestError, RestResult};
use crate::extractors::PatientParams;
use crate::state::AppState;

/// Handler for the create interaction.
///
/// Parameters come from the query string or a form-encoded body. Required
/// parameters are checked by [`PatientParams`] before the store is called.
///
/// # Response
///
/// - `201 Created` - The persisted record with its assigned identity
/// - `400 Bad Request` - A required parameter is blank, or the store
///   rejected the record for any reason other than uniqueness
/// - `409 Conflict` - Date of birth or name already taken
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    PatientParams(fields): PatientParams,
) -> RestResult<Response>
where
    S: PatientStorage + Send + Sync,
{
    debug!(
        given = %fields.given_name,
        family = %fields.family_name,
        "Processing create request"
    );

    let saved = state
        .storage()
        .save(Patient::new(fields))
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                RestError::Conflict {
                    message: e.to_string(),
                }
            } else {
                RestError::bad_request(e)
            }
        })?;

    if let Some(id) = saved.id {
        info!(id = %id, "Created patient");
    }

    Ok((StatusCode::CREATED, Json(saved)).into_response())
}
