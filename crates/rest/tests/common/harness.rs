//! REST API test harness.

use axum_test::{TestResponse, TestServer};
use demographics_persistence::PatientStorage;
use demographics_persistence::backends::sqlite::SqliteBackend;
use demographics_rest::{ServerConfig, create_app_with_config};
use serde_json::Value;

use super::fixtures::PatientFixture;

/// Test harness wrapping a [`TestServer`] over the full application stack.
///
/// # Example
///
/// ```rust,ignore
/// let harness = RestTestHarness::sqlite();
/// let created = harness.create(&PatientFixture::jane_doe()).await;
/// assert_eq!(created.status_code(), 201);
/// ```
pub struct RestTestHarness {
    /// The test server instance.
    pub server: TestServer,
}

impl RestTestHarness {
    /// Harness over a fresh in-memory SQLite database.
    pub fn sqlite() -> Self {
        Self::sqlite_with_config(ServerConfig::for_testing())
    }

    /// Harness over a fresh in-memory SQLite database with custom config.
    pub fn sqlite_with_config(config: ServerConfig) -> Self {
        let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
        backend.init_schema().expect("Failed to init schema");
        Self::with_storage(backend, config)
    }

    /// Harness over any storage backend.
    pub fn with_storage<S>(storage: S, config: ServerConfig) -> Self
    where
        S: PatientStorage + Send + Sync + 'static,
    {
        let app = create_app_with_config(storage, config);
        let server = TestServer::new(app).expect("Failed to create test server");
        Self { server }
    }

    /// `POST /patient/add` with the fixture as query parameters.
    pub async fn create(&self, patient: &PatientFixture) -> TestResponse {
        let mut request = self.server.post("/patient/add");
        for (key, value) in patient.query_pairs() {
            request = request.add_query_param(key, value);
        }
        request.await
    }

    /// Creates a patient and returns its assigned identity.
    pub async fn create_id(&self, patient: &PatientFixture) -> i64 {
        let response = self.create(patient).await;
        assert_eq!(response.status_code().as_u16(), 201, "seed create failed");
        response.json::<Value>()["id"]
            .as_i64()
            .expect("created record has a numeric id")
    }

    /// `GET /patients`, returning the `patientList` array.
    pub async fn list(&self) -> Vec<Value> {
        let response = self.server.get("/patients").await;
        assert_eq!(response.status_code().as_u16(), 200);
        response.json::<Value>()["patientList"]
            .as_array()
            .cloned()
            .expect("patientList is an array")
    }
}
