//! Patient route configuration.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use demographics_persistence::PatientStorage;

use crate::handlers;
use crate::state::AppState;

/// Creates all patient API routes.
///
/// # Routes
///
/// - `GET /patients` - List
/// - `GET /patient/get/{id}` - Get by identity
/// - `POST /patient/add` - Create
/// - `PUT /patient/update/{id}` - Update
/// - `DELETE /patient/delete/{id}` - Delete
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: PatientStorage + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/patients", get(handlers::list_handler::<S>))
        .route("/patient/get/{id}", get(handlers::read_handler::<S>))
        .route("/patient/add", post(handlers::create_handler::<S>))
        .route("/patient/update/{id}", put(handlers::update_handler::<S>))
        .route("/patient/delete/{id}", delete(handlers::delete_handler::<S>))
        .with_state(state)
}
