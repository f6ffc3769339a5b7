//! Axum extractors for patient requests.
//!
//! - [`PatientIdPath`] - Parse the `{id}` path segment into a [`PatientId`](demographics_persistence::PatientId)
//! - [`PatientParams`] - Collect create parameters from the query string or a form body
//! - [`PatientBody`] - Parse a JSON replacement record

mod patient_body;
mod patient_id;
mod patient_params;

pub use patient_body::{PatientBody, PatientBodyRejection};
pub use patient_id::PatientIdPath;
pub use patient_params::{PatientParams, PatientParamsRejection};
