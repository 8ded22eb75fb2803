//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: artifact loading and the shared projector
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request validation
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::config::ApiConfig;
use crate::middleware::{self, HostAllowlist};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router, loading predictor artifacts from `config.model_dir`.
pub fn build_app(config: &ApiConfig) -> Router {
    let services = services::build_services(config);
    build_app_with_services(services, config)
}

/// Build the router around already-wired services.
pub fn build_app_with_services(services: services::AppServices, config: &ApiConfig) -> Router {
    let allowlist = HostAllowlist::new(&config.allowed_hosts);
    if allowlist.is_unrestricted() {
        tracing::info!("host allowlist empty; accepting requests for any host");
    }

    // Host-restricted routes.
    let restricted = routes::router()
        .layer(Extension(Arc::new(services)))
        .layer(axum::middleware::from_fn_with_state(
            allowlist,
            middleware::host_allowlist_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(restricted)
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::cors_middleware)))
}
