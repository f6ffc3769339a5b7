//! A storage double that fails every call.

use async_trait::async_trait;
use demographics_persistence::error::{BackendError, StorageError, StorageResult};
use demographics_persistence::{Patient, PatientId, PatientStorage};

/// Storage whose every operation reports the backend as unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingStorage;

fn unavailable() -> StorageError {
    StorageError::Backend(BackendError::Unavailable {
        backend_name: "failing".to_string(),
        message: "database is down".to_string(),
    })
}

#[async_trait]
impl PatientStorage for FailingStorage {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    async fn find_all(&self) -> StorageResult<Vec<Patient>> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: PatientId) -> StorageResult<Option<Patient>> {
        Err(unavailable())
    }

    async fn save(&self, _patient: Patient) -> StorageResult<Patient> {
        Err(unavailable())
    }

    async fn delete(&self, _patient: &Patient) -> StorageResult<()> {
        Err(unavailable())
    }

    async fn count(&self) -> StorageResult<u64> {
        Err(unavailable())
    }

    async fn health_check(&self) -> StorageResult<()> {
        Err(unavailable())
    }
}
