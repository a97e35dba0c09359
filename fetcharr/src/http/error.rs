// HTTP error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use fetcharr_providers::JellyfinError;

/// Result type for HTTP handlers
pub type AppResult<T> = Result<T, AppError>;

/// Application error with HTTP status code
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for AppError {}

/// Error response JSON structure
#[derive(Debug, Serialize, Deserialize)]
struct ErrorResponse {
    error: String,
    status: u16,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status;
        let body = Json(ErrorResponse {
            error: self.message,
            status: status.as_u16(),
        });

        (status, body).into_response()
    }
}

/// Convert identity errors to HTTP errors. Bad credentials stay a
/// deliberately uniform 401; only transport failures leak that the
/// backend itself is down.
impl From<JellyfinError> for AppError {
    fn from(err: JellyfinError) -> Self {
        match err {
            JellyfinError::InvalidCredentials => {
                AppError::unauthorized("Invalid username or password")
            }
            JellyfinError::Unreachable(e) => {
                tracing::error!("Jellyfin unreachable: {}", e);
                AppError::bad_gateway("Authentication backend unreachable")
            }
            JellyfinError::Parse(e) => {
                tracing::error!("Jellyfin returned an unparsable response: {}", e);
                AppError::bad_gateway("Authentication backend returned an invalid response")
            }
        }
    }
}
