use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::ServiceError;

/// Request-boundary error: an HTTP status plus the `{"message": ...}` body
/// every endpoint answers with. Service errors never propagate past here.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    /// Map a service error to its HTTP shape. Internal failures are logged
    /// with their real cause and answered with the endpoint-specific
    /// `internal_message` so filesystem details never reach clients.
    pub fn from_service(err: ServiceError, internal_message: &str) -> Self {
        match err {
            ServiceError::Validation(_) => Self::new(StatusCode::BAD_REQUEST, err.message()),
            ServiceError::Conflict(_) => Self::new(StatusCode::CONFLICT, err.message()),
            ServiceError::Unauthorized => Self::new(StatusCode::UNAUTHORIZED, err.message()),
            ServiceError::Hash(_) | ServiceError::Storage(_) => {
                error!(error = %err, "internal service error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, internal_message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "message": self.message }))).into_response()
    }
}
