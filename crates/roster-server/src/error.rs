use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roster_store::StoreError;
use serde_json::json;
use thiserror::Error;

/// Errors from server setup and lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Request-level error, rendered as `{"error": message}`.
///
/// - `NotFound` → 404
/// - `BadRequest` → 400
/// - `Conflict` → 409
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::Conflict(msg) => msg,
        }
    }

    pub fn student_not_found() -> Self {
        Self::NotFound("Student not found".into())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::student_not_found(),
            StoreError::Validation(violations) => {
                Self::BadRequest(format!("Validation failed: {violations}"))
            }
            StoreError::Conflict { .. } => Self::Conflict("Email already exists".into()),
            StoreError::InvalidArgument(msg) => Self::BadRequest(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            tracing::debug!(%status, error = self.message(), "request rejected");
        }
        let body = Json(json!({ "error": self.message() }));
        (status, body).into_response()
    }
}
