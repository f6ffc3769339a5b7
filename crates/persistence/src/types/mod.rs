//! Core types for the persistence layer.
//!
//! - [`Patient`] - A patient demographic record
//! - [`PatientId`] - Store-assigned identity of a record
//! - [`PatientFields`] - The six demographic fields without identity

mod patient;

pub use patient::{Patient, PatientFields, PatientId};
