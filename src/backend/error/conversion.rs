/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers can return
 * `Result<_, BackendError>` and have failures rendered uniformly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "Invalid credentials",
 *   "status": 401
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, self);
        }

        let body = serde_json::json!({
            "message": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
