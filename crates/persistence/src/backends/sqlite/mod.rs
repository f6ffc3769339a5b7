//! SQLite backend implementation.
//!
//! This module provides a SQLite implementation of [`PatientStorage`]. It
//! supports both in-memory databases (great for testing) and file-based
//! databases (for development and small deployments).
//!
//! [`PatientStorage`]: crate::core::PatientStorage
//!
//! # Example
//!
//! ```no_run
//! use demographics_persistence::backends::sqlite::SqliteBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Create an in-memory database
//! let backend = SqliteBackend::in_memory()?;
//!
//! // Initialize the schema
//! backend.init_schema()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE patients (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     given_name TEXT NOT NULL,
//!     family_name TEXT NOT NULL,
//!     date_of_birth TEXT NOT NULL,
//!     sex TEXT NOT NULL,
//!     home_address TEXT,
//!     phone_number TEXT,
//!     UNIQUE (date_of_birth),
//!     UNIQUE (given_name, family_name)
//! );
//! ```

mod backend;
mod schema;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
