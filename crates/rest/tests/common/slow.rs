//! A storage double whose list call outlasts the request timeout.

use std::time::Duration;

use async_trait::async_trait;
use demographics_persistence::error::StorageResult;
use demographics_persistence::{Patient, PatientId, PatientStorage};

/// Storage whose `find_all` sleeps for `delay` before answering.
#[derive(Debug, Clone, Copy)]
pub struct SlowStorage {
    pub delay: Duration,
}

#[async_trait]
impl PatientStorage for SlowStorage {
    fn backend_name(&self) -> &'static str {
        "slow"
    }

    async fn find_all(&self) -> StorageResult<Vec<Patient>> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: PatientId) -> StorageResult<Option<Patient>> {
        Ok(None)
    }

    async fn save(&self, patient: Patient) -> StorageResult<Patient> {
        Ok(patient)
    }

    async fn delete(&self, _patient: &Patient) -> StorageResult<()> {
        Ok(())
    }

    async fn count(&self) -> StorageResult<u64> {
        Ok(0)
    }

    async fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }
}
