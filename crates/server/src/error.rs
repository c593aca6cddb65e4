use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cryptopulse_core::errors::CoreError;
use thiserror::Error;

/// Fatal errors of the server process.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors returned to HTTP clients as `{ "error": "..." }`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Refresh driver is not running")]
    DriverStopped,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(CoreError::UnsupportedCoin(_) | CoreError::UnsupportedRange(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Core(CoreError::Serialization(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Core(_) => StatusCode::BAD_GATEWAY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::DriverStopped => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self, %status, "request failed");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
