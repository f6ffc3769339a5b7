//! # demographics-rest - Patient Demographics HTTP API
//!
//! This crate exposes patient demographic records over a small JSON HTTP
//! API built on [axum](https://docs.rs/axum). Records are persisted through
//! any [`PatientStorage`](demographics_persistence::PatientStorage) backend
//! from `demographics-persistence`.
//!
//! ## Backend Support
//!
//! Storage backends are configured through feature flags:
//!
//! - `sqlite` - SQLite backend (default)
//! - `postgres` - PostgreSQL backend
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use demographics_rest::{create_app, ServerConfig};
//! use demographics_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SqliteBackend::open("patients.db")?;
//!     backend.init_schema()?;
//!
//!     let app = create_app(backend);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8081").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |------------|-------------|-------------|
//! | list | GET | `/patients` |
//! | get | GET | `/patient/get/{id}` |
//! | create | POST | `/patient/add?family=..&given=..&dob=..&sex=..` |
//! | update | PUT | `/patient/update/{id}` |
//! | delete | DELETE | `/patient/delete/{id}` |
//! | health | GET | `/health` |
//! | liveness | GET | `/_liveness` |
//!
//! ## Error Handling
//!
//! Error responses carry a status code and an empty body. The cause is
//! logged through `tracing`. See [`error`] for the per-operation mapping.
//!
//! ## Configuration
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DEMOGRAPHICS_SERVER_PORT` | 8081 | Server port |
//! | `DEMOGRAPHICS_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `DEMOGRAPHICS_LOG_LEVEL` | info | Log level (error, warn, info, debug, trace) |
//! | `DEMOGRAPHICS_MAX_BODY_SIZE` | 1048576 | Max request body size (bytes) |
//! | `DEMOGRAPHICS_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `DEMOGRAPHICS_ENABLE_CORS` | true | Enable CORS |
//! | `DEMOGRAPHICS_CORS_ORIGINS` | * | Allowed CORS origins |
//! | `DEMOGRAPHICS_STORAGE_BACKEND` | sqlite | Storage backend (sqlite, postgres) |
//! | `DEMOGRAPHICS_DATABASE_URL` | - | Database path or connection string |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and status mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`handlers`] - HTTP request handlers for each interaction
//! - [`extractors`] - Axum extractors for identities, parameters and bodies
//! - [`routing`] - Route configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use demographics_persistence::BackendKind;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Request, StatusCode},
};
use demographics_persistence::PatientStorage;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
///
/// # Example
///
/// ```rust,ignore
/// use demographics_rest::create_app;
/// use demographics_persistence::backends::sqlite::SqliteBackend;
///
/// let backend = SqliteBackend::in_memory()?;
/// backend.init_schema()?;
/// let app = create_app(backend);
/// ```
pub fn create_app<S>(storage: S) -> Router
where
    S: PatientStorage + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up the patient routes with body limit, tracing, timeout, CORS and
/// request-id middleware according to `config`.
///
/// # Example
///
/// ```rust,ignore
/// use demographics_rest::{create_app_with_config, ServerConfig};
/// use demographics_persistence::backends::sqlite::SqliteBackend;
///
/// let backend = SqliteBackend::in_memory()?;
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(backend, config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: PatientStorage + Send + Sync + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        storage.backend_name()
    );

    let state = AppState::new(Arc::new(storage), config.clone());

    let router =
        routing::create_routes(state).layer(DefaultBodyLimit::max(config.max_body_size));

    let service_builder = ServiceBuilder::new()
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    let router = router.layer(service_builder);

    // SetRequestId must run before the trace span is created.
    if config.enable_request_id {
        router
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    } else {
        router
    }
}

/// Builds the CORS layer based on configuration.
///
/// `*` allows any value; otherwise each setting is a comma-separated list.
/// Entries that fail to parse are skipped.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Builds the default log filter for `level`.
///
/// `level` is the base directive, so events from the binary and the
/// persistence crate are kept too. `tower_http` always logs at debug.
pub fn default_log_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::new(format!(
        "{level},demographics_rest={level},demographics_persistence={level},tower_http=debug"
    ))
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` overrides
/// `level` when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_log_filter(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
