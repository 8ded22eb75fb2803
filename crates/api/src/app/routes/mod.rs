use axum::{
    Router,
    routing::{get, post},
};

pub mod system;
pub mod twin;

/// Router for the host-restricted endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/predict_twin", post(twin::predict_twin))
        .route("/models", get(system::models))
}
