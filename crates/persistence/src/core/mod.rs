//! Core storage traits and abstractions.
//!
//! - [`PatientStorage`] - CRUD operations over patient records
//! - [`BackendKind`] - Identifies a database driver
//!
//! # Example: Implementing a Storage Backend
//!
//! ```ignore
//! use async_trait::async_trait;
//! use demographics_persistence::core::PatientStorage;
//! use demographics_persistence::error::StorageResult;
//! use demographics_persistence::types::{Patient, PatientId};
//!
//! struct MyBackend {
//!     // ... backend-specific fields
//! }
//!
//! #[async_trait]
//! impl PatientStorage for MyBackend {
//!     fn backend_name(&self) -> &'static str {
//!         "my-backend"
//!     }
//!
//!     async fn find_by_id(&self, id: PatientId) -> StorageResult<Option<Patient>> {
//!         // Implementation...
//!         todo!()
//!     }
//!
//!     // ... implement other required methods
//! }
//! ```

pub mod backend;
pub mod storage;

pub use backend::BackendKind;
pub use storage::PatientStorage;
