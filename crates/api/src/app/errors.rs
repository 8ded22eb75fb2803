use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use foresight_core::TwinError;

pub fn twin_error_to_response(err: TwinError) -> axum::response::Response {
    match &err {
        TwinError::MissingAttribute(_) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "missing_attribute", err.to_string())
        }
        TwinError::UnsupportedHorizon(_) => json_error(
            StatusCode::BAD_REQUEST,
            "unsupported_horizon",
            "Invalid 'projection_months'. Must be 6, 24, or 60.",
        ),
        // The projector reports predictor failures inside the result, so this
        // only surfaces if that contract breaks; treat it like any other fault.
        TwinError::PredictorInvocation(_) => internal_error(),
    }
}

pub fn internal_error() -> axum::response::Response {
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "projection failed")
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
