//! List handler.
//!
//! `GET [base]/patients`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use demographics_persistence::{Patient, PatientStorage};
use serde::Serialize;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Response body for the list interaction.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientList {
    /// Every stored patient, in identity order.
    pub patient_list: Vec<Patient>,
}

/// Handler for the list interaction.
///
/// # Response
///
/// - `200 OK` - `{"patientList": [...]}`
/// - `500 Internal Server Error` - The store failed
pub async fn list_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: PatientStorage + Send + Sync,
{
    debug!("Processing list request");

    let patients = state.storage().find_all().await.map_err(RestError::internal)?;

    debug!(count = patients.len(), "Returning patient list");

    Ok((
        StatusCode::OK,
        Json(PatientList {
            patient_list: patients,
        }),
    )
        .into_response())
}
