//! PostgreSQL backend implementation.
//!
//! This module provides a PostgreSQL implementation of
//! [`PatientStorage`](crate::core::PatientStorage) using connection pooling
//! via deadpool-postgres.
//!
//! # Example
//!
//! ```no_run
//! use demographics_persistence::backends::postgres::{PostgresBackend, PostgresConfig};
//!
//! # async fn main_example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a PostgreSQL backend
//! let config = PostgresConfig::default();
//! let backend = PostgresBackend::new(config).await?;
//!
//! // Initialize the schema
//! backend.init_schema().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE patients (
//!     id BIGSERIAL PRIMARY KEY,
//!     given_name TEXT NOT NULL,
//!     family_name TEXT NOT NULL,
//!     date_of_birth TEXT NOT NULL,
//!     sex TEXT NOT NULL,
//!     home_address TEXT,
//!     phone_number TEXT,
//!     CONSTRAINT uk_patients_date_of_birth UNIQUE (date_of_birth),
//!     CONSTRAINT uk_patients_name UNIQUE (given_name, family_name)
//! );
//! ```

mod backend;
mod schema;
mod storage;

pub use backend::{PostgresBackend, PostgresConfig, PostgresSslMode};
