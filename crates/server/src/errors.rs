use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;

/// In-body error object, e.g. `{"error": "Student not found"}`.
///
/// Sent with HTTP 200: existing callers of this API detect failure by the
/// presence of the `error` field, not the status code, so the status stays
/// 200 for compatibility.
#[derive(Debug)]
pub struct ApiError(pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let msg = self.0;
        (StatusCode::OK, Json(serde_json::json!({"error": msg}))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        ApiError(e.to_string())
    }
}
