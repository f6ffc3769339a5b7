//! Patient Demographics Persistence Layer
//!
//! This crate stores patient demographic records in a relational database
//! and exposes them through the [`PatientStorage`] trait. Backends are
//! selected with feature flags.
//!
//! # Backend Features
//!
//! Enable backends with feature flags in `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! demographics-persistence = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! Available backend features:
//! - `sqlite` (default) - SQLite with in-memory and file modes
//! - `postgres` - PostgreSQL via a deadpool connection pool
//!
//! # Architecture
//!
//! - [`core`] - The storage trait and backend identification
//! - [`types`] - The patient record and its identity
//! - [`backends`] - Database driver implementations
//! - [`error`] - Error types for storage operations
//!
//! # Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "sqlite")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use demographics_persistence::backends::sqlite::SqliteBackend;
//! use demographics_persistence::core::PatientStorage;
//! use demographics_persistence::types::{Patient, PatientFields};
//!
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! let saved = backend
//!     .save(Patient::new(PatientFields {
//!         given_name: "Jane".to_string(),
//!         family_name: "Doe".to_string(),
//!         date_of_birth: "1980-01-01".to_string(),
//!         sex: "F".to_string(),
//!         home_address: None,
//!         phone_number: None,
//!     }))
//!     .await?;
//!
//! assert!(saved.id.is_some());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{StorageError, StorageResult};
pub use types::{Patient, PatientFields, PatientId};

pub use core::{BackendKind, PatientStorage};
