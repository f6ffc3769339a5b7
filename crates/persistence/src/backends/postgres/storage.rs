//! PatientStorage implementation for PostgreSQL.

use async_trait::async_trait;
use tokio_postgres::Row;

use crate::core::PatientStorage;
use crate::error::{BackendError, ResourceError, StorageError, StorageResult};
use crate::types::{Patient, PatientId};

use super::PostgresBackend;

const SELECT_COLUMNS: &str = "SELECT id, given_name, family_name, date_of_birth, sex, \
     home_address, phone_number FROM patients";

fn query_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::QueryError { message })
}

fn patient_from_row(row: &Row) -> Patient {
    Patient {
        id: Some(PatientId::new(row.get(0))),
        given_name: row.get(1),
        family_name: row.get(2),
        date_of_birth: row.get(3),
        sex: row.get(4),
        home_address: row.get(5),
        phone_number: row.get(6),
    }
}

#[async_trait]
impl PatientStorage for PostgresBackend {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn find_all(&self) -> StorageResult<Vec<Patient>> {
        let client = self.get_client().await?;

        let sql = format!("{} ORDER BY id", SELECT_COLUMNS);
        let rows = client.query(sql.as_str(), &[]).await?;

        Ok(rows.iter().map(patient_from_row).collect())
    }

    async fn find_by_id(&self, id: PatientId) -> StorageResult<Option<Patient>> {
        let client = self.get_client().await?;

        let sql = format!("{} WHERE id = $1", SELECT_COLUMNS);
        let row = client.query_opt(sql.as_str(), &[&id.get()]).await?;

        Ok(row.as_ref().map(patient_from_row))
    }

    async fn save(&self, mut patient: Patient) -> StorageResult<Patient> {
        patient.validate()?;

        let client = self.get_client().await?;

        match patient.id {
            None => {
                let row = client
                    .query_one(
                        "INSERT INTO patients
                            (given_name, family_name, date_of_birth, sex, home_address, phone_number)
                         VALUES ($1, $2, $3, $4, $5, $6)
                         RETURNING id",
                        &[
                            &patient.given_name,
                            &patient.family_name,
                            &patient.date_of_birth,
                            &patient.sex,
                            &patient.home_address,
                            &patient.phone_number,
                        ],
                    )
                    .await?;

                let id = PatientId::new(row.get(0));
                patient.id = Some(id);
                tracing::debug!(%id, "Inserted patient");
            }
            Some(id) => {
                let affected = client
                    .execute(
                        "UPDATE patients
                         SET given_name = $1, family_name = $2, date_of_birth = $3, sex = $4,
                             home_address = $5, phone_number = $6
                         WHERE id = $7",
                        &[
                            &patient.given_name,
                            &patient.family_name,
                            &patient.date_of_birth,
                            &patient.sex,
                            &patient.home_address,
                            &patient.phone_number,
                            &id.get(),
                        ],
                    )
                    .await?;

                if affected == 0 {
                    return Err(StorageError::Resource(ResourceError::NotFound { id }));
                }
                tracing::debug!(%id, "Updated patient");
            }
        }

        Ok(patient)
    }

    async fn delete(&self, patient: &Patient) -> StorageResult<()> {
        let id = patient
            .id
            .ok_or(StorageError::Resource(ResourceError::Unsaved))?;

        let client = self.get_client().await?;
        let affected = client
            .execute("DELETE FROM patients WHERE id = $1", &[&id.get()])
            .await?;

        if affected == 0 {
            return Err(StorageError::Resource(ResourceError::NotFound { id }));
        }
        tracing::debug!(%id, "Deleted patient");

        Ok(())
    }

    async fn count(&self) -> StorageResult<u64> {
        let client = self.get_client().await?;

        let row = client.query_one("SELECT COUNT(*) FROM patients", &[]).await?;
        let count: i64 = row.get(0);
        u64::try_from(count).map_err(|e| query_error(format!("Invalid row count: {}", e)))
    }

    async fn health_check(&self) -> StorageResult<()> {
        let client = self.get_client().await.map_err(|_| {
            StorageError::Backend(BackendError::Unavailable {
                backend_name: "postgres".to_string(),
                message: "Failed to get connection".to_string(),
            })
        })?;

        client
            .query_opt("SELECT 1 FROM patients LIMIT 1", &[])
            .await
            .map_err(|e| query_error(format!("Health check failed: {}", e)))?;

        Ok(())
    }
}
