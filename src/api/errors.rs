use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::error::DomainError;

/// API error type with HTTP status code and message
///
/// The single place where domain error kinds become transport responses;
/// handlers propagate `DomainError` with `?` and never build status codes.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub detail: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            detail: None,
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 401 Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Creates a 403 Forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::bad_request(msg),
            DomainError::NotFound(msg) => Self::not_found(msg),
            DomainError::Conflict(msg) => Self::conflict(msg),
            DomainError::BadCredentials => Self::unauthorized("Invalid credentials"),
            DomainError::Unauthenticated(msg) => Self::unauthorized(msg),
            DomainError::Forbidden(msg) => Self::forbidden(msg),
            DomainError::Internal(msg) => {
                // full detail stays in the logs, not in the response body
                tracing::error!(error = %msg, "internal error");
                Self::internal_server_error("Internal server error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.detail {
            Some(detail) => Json(json!({ "error": self.message, "detail": detail })),
            None => Json(json!({ "error": self.message })),
        };

        (self.status, body).into_response()
    }
}
