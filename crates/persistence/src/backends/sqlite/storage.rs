//! PatientStorage implementation for SQLite.

use async_trait::async_trait;
use rusqlite::{Row, params};

use crate::core::PatientStorage;
use crate::error::{BackendError, ResourceError, StorageError, StorageResult};
use crate::types::{Patient, PatientId};

use super::SqliteBackend;

const SELECT_COLUMNS: &str = "SELECT id, given_name, family_name, date_of_birth, sex, \
     home_address, phone_number FROM patients";

fn query_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::QueryError { message })
}

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: Some(PatientId::new(row.get(0)?)),
        given_name: row.get(1)?,
        family_name: row.get(2)?,
        date_of_birth: row.get(3)?,
        sex: row.get(4)?,
        home_address: row.get(5)?,
        phone_number: row.get(6)?,
    })
}

#[async_trait]
impl PatientStorage for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn find_all(&self) -> StorageResult<Vec<Patient>> {
        let conn = self.get_connection()?;

        let mut stmt = conn.prepare(&format!("{} ORDER BY id", SELECT_COLUMNS))?;
        let patients = stmt
            .query_map([], patient_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(patients)
    }

    async fn find_by_id(&self, id: PatientId) -> StorageResult<Option<Patient>> {
        let conn = self.get_connection()?;

        let result = conn.query_row(
            &format!("{} WHERE id = ?1", SELECT_COLUMNS),
            params![id.get()],
            patient_from_row,
        );

        match result {
            Ok(patient) => Ok(Some(patient)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, mut patient: Patient) -> StorageResult<Patient> {
        patient.validate()?;

        let conn = self.get_connection()?;

        match patient.id {
            None => {
                conn.execute(
                    "INSERT INTO patients
                        (given_name, family_name, date_of_birth, sex, home_address, phone_number)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![
                        patient.given_name,
                        patient.family_name,
                        patient.date_of_birth,
                        patient.sex,
                        patient.home_address,
                        patient.phone_number,
                    ],
                )?;

                let id = PatientId::new(conn.last_insert_rowid());
                patient.id = Some(id);
                tracing::debug!(%id, "Inserted patient");
            }
            Some(id) => {
                let affected = conn.execute(
                    "UPDATE patients
                     SET given_name = ?1, family_name = ?2, date_of_birth = ?3, sex = ?4,
                         home_address = ?5, phone_number = ?6
                     WHERE id = ?7",
                    params![
                        patient.given_name,
                        patient.family_name,
                        patient.date_of_birth,
                        patient.sex,
                        patient.home_address,
                        patient.phone_number,
                        id.get(),
                    ],
                )?;

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

        let conn = self.get_connection()?;
        let affected = conn.execute("DELETE FROM patients WHERE id = ?1", params![id.get()])?;

        if affected == 0 {
            return Err(StorageError::Resource(ResourceError::NotFound { id }));
        }
        tracing::debug!(%id, "Deleted patient");

        Ok(())
    }

    async fn count(&self) -> StorageResult<u64> {
        let conn = self.get_connection()?;

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))?;
        u64::try_from(count).map_err(|e| query_error(format!("Invalid row count: {}", e)))
    }

    async fn health_check(&self) -> StorageResult<()> {
        let conn = self.get_connection().map_err(|_| {
            StorageError::Backend(BackendError::Unavailable {
                backend_name: "sqlite".to_string(),
                message: "Failed to get connection".to_string(),
            })
        })?;

        conn.query_row("SELECT 1 FROM patients LIMIT 1", [], |_| Ok(()))
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(()),
                other => Err(other),
            })
            .map_err(|e| query_error(format!("Health check failed: {}", e)))
    }
}
