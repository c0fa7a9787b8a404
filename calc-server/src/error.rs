//! API error responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use calc_core::{CalcError, SUPPORTED_OPERATIONS};

/// Wrapper turning a calculation error into a client-error response
///
/// Every [`CalcError`] maps to status 400 with a JSON body carrying the
/// error message. Unknown-operation errors additionally list the supported
/// operation names so callers can correct themselves.
#[derive(Debug)]
pub struct ApiError(pub CalcError);

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self.0 {
            CalcError::UnknownOperation(_) => serde_json::json!({
                "error": self.0.to_string(),
                "operations_disponibles": SUPPORTED_OPERATIONS,
            }),
            _ => serde_json::json!({
                "error": self.0.to_string(),
            }),
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
