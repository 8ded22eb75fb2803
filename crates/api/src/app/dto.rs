use axum::http::StatusCode;
use serde_json::Value as JsonValue;

use foresight_core::{ProjectionHorizon, TwinError, UserProfile};

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

/// Validated body of `POST /predict_twin`.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictTwinRequest {
    pub profile: UserProfile,
    pub horizon: ProjectionHorizon,
}

/// Validate the raw JSON body.
///
/// The body is taken as untyped JSON so each failure (missing key, bad
/// horizon, malformed profile) gets its own error code instead of a generic
/// deserialization rejection.
pub fn parse_predict_request(body: &JsonValue) -> Result<PredictTwinRequest, axum::response::Response> {
    let (Some(user_data), Some(months)) = (body.get("user_data"), body.get("projection_months")) else {
        return Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "missing_field",
            "Missing 'user_data' or 'projection_months'.",
        ));
    };

    let horizon = match months.as_i64() {
        Some(months) => ProjectionHorizon::try_from(months).map_err(errors::twin_error_to_response)?,
        // non-integers get the same answer as any other unsupported count
        None => return Err(errors::twin_error_to_response(TwinError::UnsupportedHorizon(0))),
    };

    let profile: UserProfile = serde_json::from_value(user_data.clone()).map_err(|e| {
        errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_user_data",
            format!("'user_data' is malformed: {e}"),
        )
    })?;

    Ok(PredictTwinRequest { profile, horizon })
}
