//! Health check endpoint handlers.
//!
//! Provides health and liveness endpoints for monitoring and load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use demographics_persistence::PatientStorage;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Runs the store's health check and reports the record count.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - Store reachable
/// - `503 Service Unavailable` - Store health check failed
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: PatientStorage + Send + Sync,
{
    debug!("Processing health check request");

    let storage = state.storage();
    let unavailable = |e: demographics_persistence::StorageError| RestError::ServiceUnavailable {
        message: e.to_string(),
    };

    storage.health_check().await.map_err(unavailable)?;
    let patients = storage.count().await.map_err(unavailable)?;

    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": storage.backend_name(),
        "patients": patients,
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}

/// Handler for the liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}
