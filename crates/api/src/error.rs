//! API error handling
//!
//! Consistent JSON error responses across all endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// Structured JSON error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error type that converts to JSON responses
#[derive(Debug)]
pub enum ApiError {
    /// Client sent something we cannot act on
    BadRequest { message: String, code: &'static str },
    /// Missing or rejected credentials
    Unauthorized(String),
    /// Resource not found
    NotFound(String),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::BadRequest { message, code } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: message,
                    code: Some(code.to_string()),
                },
            ),
            ApiError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse {
                    error: msg,
                    code: Some("unauthorized".to_string()),
                },
            ),
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: msg,
                    code: Some("not_found".to_string()),
                },
            ),
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal server error".to_string(),
                        code: Some("internal_error".to_string()),
                    },
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<common::Error> for ApiError {
    fn from(err: common::Error) -> Self {
        use common::Error;

        let message = err.to_string();
        match err {
            Error::UnknownActivityType { .. } => ApiError::BadRequest {
                message,
                code: "unknown_activity_type",
            },
            Error::UnknownCategory(_) => ApiError::BadRequest {
                message,
                code: "unknown_category",
            },
            Error::InvalidQuantity(_) => ApiError::BadRequest {
                message,
                code: "invalid_quantity",
            },
            Error::EmailAlreadyRegistered => ApiError::BadRequest {
                message,
                code: "email_taken",
            },
            Error::InvalidCredentials | Error::InvalidToken => ApiError::Unauthorized(message),
            Error::NotFound(_) => ApiError::NotFound(message),
            Error::Serialization(_) | Error::Config(_) | Error::Internal(_) => {
                ApiError::Internal(message)
            }
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Extension trait to convert Option to NotFound
pub trait OptionExt<T> {
    fn not_found(self, resource: impl Into<String>) -> Result<T, ApiError>;
}

impl<T> OptionExt<T> for Option<T> {
    fn not_found(self, resource: impl Into<String>) -> Result<T, ApiError> {
        self.ok_or_else(|| ApiError::NotFound(resource.into()))
    }
}
