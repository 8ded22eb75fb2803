use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value as JsonValue;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn predict_twin(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected non-JSON body");
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_request", "Request must be JSON");
        }
    };

    let req = match dto::parse_predict_request(&body) {
        Ok(req) => req,
        Err(res) => return res,
    };

    // Inference is CPU-bound; keep it off the async workers.
    let projector = services.projector().clone();
    let outcome = tokio::task::spawn_blocking(move || projector.project(&req.profile, req.horizon)).await;

    match outcome {
        Ok(Ok(result)) => (StatusCode::OK, Json(result)).into_response(),
        Ok(Err(e)) => {
            tracing::info!(error = %e, "projection rejected");
            errors::twin_error_to_response(e)
        }
        Err(e) => {
            tracing::error!(error = %e, "projection task failed");
            errors::internal_error()
        }
    }
}
