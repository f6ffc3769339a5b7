//! HTTP request handlers for patient interactions.
//!
//! - [`list`] - List every patient
//! - [`read`] - Get a patient by identity
//! - [`create`] - Create a patient from request parameters
//! - [`update`] - Replace a patient's fields
//! - [`delete`] - Delete a patient
//! - [`health`] - Health and liveness endpoints

pub mod create;
pub mod delete;
pub mod health;
pub mod list;
pub mod read;
pub mod update;

pub use create::create_handler;
pub use delete::delete_handler;
pub use health::{health_handler, liveness_handler};
pub use list::list_handler;
pub use read::read_handler;
pub use update::update_handler;
