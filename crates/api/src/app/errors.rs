use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use upkeep_ai::AnalyticsError;

pub fn analytics_error_to_response(err: AnalyticsError) -> axum::response::Response {
    match err {
        AnalyticsError::InvalidInput { field, message } => (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({
                "error": "validation_error",
                "field": field,
                "message": message,
            })),
        )
            .into_response(),
        AnalyticsError::Computation(detail) => {
            // Surfaced opaquely; the detail stays in the logs.
            tracing::error!(detail = %detail, "analytics computation failed");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "computation_error",
                "analysis could not be computed from the supplied data",
            )
        }
        AnalyticsError::Internal(detail) => {
            tracing::error!(detail = %detail, "analytics internal error");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "internal error",
            )
        }
    }
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
