//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services of this workspace.
//!
//! - **[`errors`]**: [`AppError`] and the `{"error": "..."}` body
//! - **[`response`]**: [`json_response`], the one place responses are encoded
//! - **[`server`]**: router factory with docs and middleware, health endpoint,
//!   graceful shutdown
//! - **[`http`]**: CORS and security headers
//!
//! ```ignore
//! use axum_helpers::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let router = create_router::<ApiDoc>(api_routes)?.merge(health_router(app_info!()));
//! create_production_app(router, &config.server, Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod http;
pub mod response;
pub mod server;

pub use errors::{AppError, ErrorResponse};
pub use http::{cors_layer_from_env, create_cors_layer, security_headers};
pub use response::{MessageResponse, json_response};
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, serve, trim_trailing_slash,
};
