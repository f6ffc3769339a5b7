//! Core patient storage trait.
//!
//! This module defines the [`PatientStorage`] trait, the repository-style
//! contract the REST layer consumes: list everything, look up by identity,
//! save (insert or update), and delete.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{Patient, PatientId};

/// Storage contract for patient records.
///
/// Each call is atomic from the caller's point of view. No operation spans a
/// transaction with another; concurrent writers are arbitrated only by the
/// database.
///
/// # Uniqueness
///
/// Implementations enforce two uniqueness invariants on the `patients`
/// table: no two records share a date of birth, and no two records share a
/// `(given name, family name)` pair. A write that would break either fails
/// with [`IntegrityError::UniqueViolation`](crate::error::IntegrityError).
///
/// # Example
///
/// ```ignore
/// use demographics_persistence::core::PatientStorage;
/// use demographics_persistence::types::{Patient, PatientFields};
///
/// async fn example<S: PatientStorage>(storage: &S) -> StorageResult<()> {
///     let saved = storage.save(Patient::new(fields)).await?;
///     let id = saved.id.expect("identity assigned on save");
///
///     let found = storage.find_by_id(id).await?;
///     assert_eq!(found.as_ref(), Some(&saved));
///
///     storage.delete(&saved).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait PatientStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Returns every patient, ordered by identity (insertion order).
    async fn find_all(&self) -> StorageResult<Vec<Patient>>;

    /// Looks up a patient by identity.
    ///
    /// A missing record is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: PatientId) -> StorageResult<Option<Patient>>;

    /// Persists a patient.
    ///
    /// A patient without identity is inserted and returned with its newly
    /// assigned identity. A patient with identity overwrites the stored row.
    ///
    /// # Errors
    ///
    /// * `StorageError::Validation` - A required field is blank
    /// * `StorageError::Integrity(UniqueViolation)` - A uniqueness invariant would break
    /// * `StorageError::Resource(NotFound)` - Updating an identity with no row
    /// * `StorageError::Backend` - Any database failure
    async fn save(&self, patient: Patient) -> StorageResult<Patient>;

    /// Removes a persisted patient.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(Unsaved)` - The patient has no identity
    /// * `StorageError::Resource(NotFound)` - No row has that identity
    /// * `StorageError::Backend` - Any database failure
    async fn delete(&self, patient: &Patient) -> StorageResult<()>;

    /// Counts stored patients.
    async fn count(&self) -> StorageResult<u64>;

    /// Checks that the backend is reachable and answering queries.
    async fn health_check(&self) -> StorageResult<()>;
}
