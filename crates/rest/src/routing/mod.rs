//! Route configuration for the patient API.
//!
//! This module contains the routing configuration that maps HTTP paths
//! to handlers.

pub mod patient_routes;

pub use patient_routes::create_routes;
