//! Response types and error handling for API endpoints
//!
//! Every response carries the `{status, data?, message?}` envelope:
//! `status` is `"success"` on 2xx, `"failed"` on client errors, and
//! `"error"` on unknown routes and server failures. Server-side detail is
//! logged and never leaks into the message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use booking_common::AppError;
use booking_core::DomainError;
use booking_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Domain(e) => StatusCode::from_u16(AppError::domain_status_code(e))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::Validation(_) | Self::InvalidPath(_) | Self::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    /// Create an invalid path error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Create an invalid query error
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }
}

/// Error response envelope
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors with full detail; the client only ever sees a
        // generic message for these.
        let (envelope_status, message) = if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
            ("error", "Internal server error".to_string())
        } else {
            ("failed", self.to_string())
        };

        let body = ErrorBody {
            status: envelope_status,
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Success envelope body
#[derive(Debug, Serialize)]
struct SuccessBody<T> {
    status: &'static str,
    data: T,
}

/// Wrapper for successful JSON responses (200)
///
/// `ApiData(())` serializes `data` as `null`.
pub struct ApiData<T>(pub T);

impl<T: Serialize> IntoResponse for ApiData<T> {
    fn into_response(self) -> Response {
        Json(SuccessBody {
            status: "success",
            data: self.0,
        })
        .into_response()
    }
}

/// Created response (201) with enveloped JSON body
pub struct Created<T>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = ApiData(self.0).into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
