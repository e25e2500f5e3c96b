//! # Axum Helpers
//!
//! Shared building blocks for the workspace's Axum services.
//!
//! - **[`server`]**: router assembly with OpenAPI docs, health endpoints, graceful shutdown
//! - **[`http`]**: CORS and security-header middleware
//! - **[`errors`]**: structured error responses with error codes
//! - **[`extractors`]**: `ObjectIdPath` and `ValidatedJson`
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let router = create_router::<ApiDoc>(Router::new(), health_router(app_info!()))?;
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {})
//!     .await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    create_production_app, create_router, health_router, run_health_checks, shutdown_signal,
    HealthCheckFuture, HealthResponse, ShutdownCoordinator,
};

pub use http::{cors_layer_from_env, create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{ObjectIdPath, ValidatedJson};
