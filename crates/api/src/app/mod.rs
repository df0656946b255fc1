//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: executor, analysis config, and the usage-metering sink
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request DTOs and mapping into pipeline inputs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    build_app_with_services(Arc::new(services::AppServices::build()))
}

/// Router wiring with injectable services (tests swap the meter/config).
pub fn build_app_with_services(services: Arc<services::AppServices>) -> Router {
    // Protected routes: require the gateway-installed tenant header.
    let protected = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn(middleware::tenant_middleware));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
}
