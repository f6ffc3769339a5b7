//! SQLite backend integration tests.
//!
//! These tests exercise the SQLite backend through the public
//! [`PatientStorage`] API.

use demographics_persistence::backends::sqlite::{SqliteBackend, SqliteBackendConfig};
use demographics_persistence::core::PatientStorage;
use demographics_persistence::error::{IntegrityError, ResourceError, StorageError};
use demographics_persistence::types::{Patient, PatientFields, PatientId};

fn create_backend() -> SqliteBackend {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to initialize schema");
    backend
}

fn fields(given: &str, family: &str, dob: &str) -> PatientFields {
    PatientFields {
        given_name: given.to_string(),
        family_name: family.to_string(),
        date_of_birth: dob.to_string(),
        sex: "F".to_string(),
        home_address: Some("1 Main St".to_string()),
        phone_number: Some("555-0100".to_string()),
    }
}

// ============================================================================
// Save (insert) Tests
// ============================================================================

#[tokio::test]
async fn test_save_inserts_and_assigns_distinct_ids() {
    let backend = create_backend();

    let jane = backend
        .save(Patient::new(fields("Jane", "Doe", "1980-01-01")))
        .await
        .unwrap();
    let john = backend
        .save(Patient::new(fields("John", "Roe", "1975-05-05")))
        .await
        .unwrap();

    assert!(jane.id.is_some());
    assert!(john.id.is_some());
    assert_ne!(jane.id, john.id);
    assert_eq!(backend.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_save_keeps_absent_optionals() {
    let backend = create_backend();
    let mut input = fields("Jane", "Doe", "1980-01-01");
    input.home_address = None;
    input.phone_number = None;

    let saved = backend.save(Patient::new(input)).await.unwrap();
    let found = backend.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();

    assert_eq!(found.home_address, None);
    assert_eq!(found.phone_number, None);
}

#[tokio::test]
async fn test_duplicate_date_of_birth_rejected() {
    let backend = create_backend();
    backend
        .save(Patient::new(fields("Jane", "Doe", "1980-01-01")))
        .await
        .unwrap();

    let err = backend
        .save(Patient::new(fields("John", "Roe", "1980-01-01")))
        .await
        .unwrap_err();

    match err {
        StorageError::Integrity(IntegrityError::UniqueViolation { constraint }) => {
            assert!(constraint.contains("date_of_birth"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
    assert_eq!(backend.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_duplicate_name_pair_rejected() {
    let backend = create_backend();
    backend
        .save(Patient::new(fields("Jane", "Doe", "1980-01-01")))
        .await
        .unwrap();

    let err = backend
        .save(Patient::new(fields("Jane", "Doe", "1999-09-09")))
        .await
        .unwrap_err();
    assert!(err.is_unique_violation());
}

#[tokio::test]
async fn test_same_given_name_different_family_allowed() {
    let backend = create_backend();
    backend
        .save(Patient::new(fields("Jane", "Doe", "1980-01-01")))
        .await
        .unwrap();

    let result = backend
        .save(Patient::new(fields("Jane", "Smith", "1981-01-01")))
        .await;
    assert!(result.is_ok());
}

// ============================================================================
// Read Tests
// ============================================================================

#[tokio::test]
async fn test_find_all_empty() {
    let backend = create_backend();
    assert!(backend.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_all_ordered_by_id() {
    let backend = create_backend();
    for (given, dob) in [("Ann", "1970-01-01"), ("Bea", "1971-01-01"), ("Cid", "1972-01-01")] {
        backend
            .save(Patient::new(fields(given, "Doe", dob)))
            .await
            .unwrap();
    }

    let all = backend.find_all().await.unwrap();
    let names: Vec<&str> = all.iter().map(|p| p.given_name.as_str()).collect();
    assert_eq!(names, vec!["Ann", "Bea", "Cid"]);

    let ids: Vec<PatientId> = all.iter().filter_map(|p| p.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

// ============================================================================
// Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let backend = create_backend();
    let mut saved = backend
        .save(Patient::new(fields("Jane", "Doe", "1980-01-01")))
        .await
        .unwrap();
    let id = saved.id.unwrap();

    let mut replacement = fields("Janet", "Doe", "1980-01-02");
    replacement.phone_number = None;
    saved.apply(replacement.clone());
    backend.save(saved).await.unwrap();

    let found = backend.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found.id, Some(id));
    assert_eq!(found.fields(), replacement);
}

#[tokio::test]
async fn test_update_into_existing_name_rejected() {
    let backend = create_backend();
    backend
        .save(Patient::new(fields("Jane", "Doe", "1980-01-01")))
        .await
        .unwrap();
    let mut john = backend
        .save(Patient::new(fields("John", "Roe", "1975-05-05")))
        .await
        .unwrap();

    john.given_name = "Jane".to_string();
    john.family_name = "Doe".to_string();
    let err = backend.save(john).await.unwrap_err();
    assert!(err.is_unique_violation());
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let backend = create_backend();
    let mut ghost = Patient::new(fields("Jane", "Doe", "1980-01-01"));
    ghost.id = Some(PatientId::new(999));

    let err = backend.save(ghost).await.unwrap_err();
    assert!(matches!(
        err,
        StorageError::Resource(ResourceError::NotFound { id }) if id == PatientId::new(999)
    ));
    assert_eq!(backend.count().await.unwrap(), 0);
}

// ============================================================================
// Delete Tests
// ============================================================================

#[tokio::test]
async fn test_delete_then_name_can_be_reused() {
    let backend = create_backend();
    let saved = backend
        .save(Patient::new(fields("Jane", "Doe", "1980-01-01")))
        .await
        .unwrap();

    backend.delete(&saved).await.unwrap();
    assert_eq!(backend.count().await.unwrap(), 0);

    let again = backend
        .save(Patient::new(fields("Jane", "Doe", "1980-01-01")))
        .await
        .unwrap();
    assert_ne!(again.id, saved.id);
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let backend = create_backend();
    let saved = backend
        .save(Patient::new(fields("Jane", "Doe", "1980-01-01")))
        .await
        .unwrap();

    backend.delete(&saved).await.unwrap();
    assert!(backend.delete(&saved).await.unwrap_err().is_not_found());
}

// ============================================================================
// File-based Database Tests
// ============================================================================

#[tokio::test]
async fn test_file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patients.db");

    let id = {
        let backend = SqliteBackend::open(&path).unwrap();
        backend.init_schema().unwrap();
        let saved = backend
            .save(Patient::new(fields("Jane", "Doe", "1980-01-01")))
            .await
            .unwrap();
        saved.id.unwrap()
    };

    let reopened = SqliteBackend::open(&path).unwrap();
    reopened.init_schema().unwrap();
    let found = reopened.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found.given_name, "Jane");
}

#[tokio::test]
async fn test_file_database_with_pooled_connections() {
    let dir = tempfile::tempdir().unwrap();
    let config = SqliteBackendConfig {
        max_connections: 4,
        ..Default::default()
    };
    let backend = SqliteBackend::with_config(dir.path().join("pooled.db"), config).unwrap();
    backend.init_schema().unwrap();

    for (given, dob) in [("Ann", "1970-01-01"), ("Bea", "1971-01-01")] {
        backend
            .save(Patient::new(fields(given, "Doe", dob)))
            .await
            .unwrap();
    }

    assert_eq!(backend.find_all().await.unwrap().len(), 2);
    assert!(backend.health_check().await.is_ok());
}
