//! Server configuration for the patient demographics API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DEMOGRAPHICS_SERVER_PORT` | 8081 | Server port |
//! | `DEMOGRAPHICS_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `DEMOGRAPHICS_LOG_LEVEL` | info | Log level |
//! | `DEMOGRAPHICS_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `DEMOGRAPHICS_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `DEMOGRAPHICS_ENABLE_CORS` | true | Enable CORS |
//! | `DEMOGRAPHICS_CORS_ORIGINS` | * | Allowed origins |
//! | `DEMOGRAPHICS_CORS_METHODS` | GET,POST,PUT,DELETE,OPTIONS | Allowed methods |
//! | `DEMOGRAPHICS_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//! | `DEMOGRAPHICS_STORAGE_BACKEND` | sqlite | Storage backend (sqlite, postgres) |
//! | `DEMOGRAPHICS_DATABASE_URL` | - | SQLite path or PostgreSQL URL |
//! | `DEMOGRAPHICS_MAX_CONNECTIONS` | 10 | Connection pool size |
//! | `DEMOGRAPHICS_ENABLE_REQUEST_ID` | true | Tag requests with `x-request-id` |
//!
//! # Example
//!
//! ```rust
//! use demographics_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! ```

use clap::Parser;
use demographics_persistence::BackendKind;

/// Server configuration for the patient demographics API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "patient-demographics")]
#[command(about = "Patient demographics HTTP service")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "DEMOGRAPHICS_SERVER_PORT", default_value = "8081")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "DEMOGRAPHICS_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "DEMOGRAPHICS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "DEMOGRAPHICS_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "DEMOGRAPHICS_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "DEMOGRAPHICS_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "DEMOGRAPHICS_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "DEMOGRAPHICS_CORS_METHODS",
        default_value = "GET,POST,PUT,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "DEMOGRAPHICS_CORS_HEADERS", default_value = "Content-Type,Accept")]
    pub cors_headers: String,

    /// Storage backend (sqlite, postgres).
    #[arg(long, env = "DEMOGRAPHICS_STORAGE_BACKEND", default_value = "sqlite")]
    pub storage_backend: String,

    /// Database location: a SQLite file path (or `:memory:`), or a
    /// `postgres://` connection string.
    #[arg(long, env = "DEMOGRAPHICS_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "DEMOGRAPHICS_MAX_CONNECTIONS", default_value = "10")]
    pub max_connections: u32,

    /// Enable request ID tracking.
    #[arg(long, env = "DEMOGRAPHICS_ENABLE_REQUEST_ID", default_value = "true")]
    pub enable_request_id: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8081,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: 1024 * 1024, // 1MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept".to_string(),
            storage_backend: "sqlite".to_string(),
            database_url: None,
            max_connections: 10,
            enable_request_id: true,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse_from(["patient-demographics"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolves the configured storage backend.
    pub fn storage_backend_mode(&self) -> Result<BackendKind, String> {
        self.storage_backend.parse()
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.max_connections == 0 {
            errors.push("Max connections cannot be 0".to_string());
        }

        match self.storage_backend_mode() {
            Ok(kind) => {
                if let Some(url) = self.database_url.as_deref() {
                    let is_postgres_url =
                        url.starts_with("postgres://") || url.starts_with("postgresql://");
                    match kind {
                        BackendKind::Sqlite if is_postgres_url => errors.push(format!(
                            "Database URL '{}' is a PostgreSQL connection string but the storage backend is sqlite",
                            url
                        )),
                        BackendKind::Postgres if !is_postgres_url => errors.push(format!(
                            "Database URL '{}' is not a postgres:// or postgresql:// connection string",
                            url
                        )),
                        _ => {}
                    }
                }
            }
            Err(e) => errors.push(e),
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0, an in-memory database, and disables
    /// features that might interfere with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            max_body_size: 1024 * 1024,
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            storage_backend: "sqlite".to_string(),
            database_url: Some(":memory:".to_string()),
            max_connections: 1,
            enable_request_id: false,
        }
    }
}
