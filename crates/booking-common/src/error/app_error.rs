//! Application error types
//!
//! Unified error handling for the entire application.

use booking_core::DomainError;
use std::fmt;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors - the three 401 kinds carry distinguishable
    // messages (missing header, invalid token, expired token)
    #[error("Please log in first")]
    MissingAuth,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has expired")]
    TokenExpired,

    #[error("User does not exist or password is incorrect")]
    InvalidCredentials,

    // Authorization - distinct kind from the Unauthenticated family
    #[error("User is not a coach")]
    NotCoach,

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    ///
    /// Referenced ids that do not exist map to 400 rather than 404 (this
    /// system's convention); 404 is reserved for unknown routes. Duplicate
    /// resources are 409; booking-invariant violations are 400.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::Validation(_) | Self::NotFound(_) | Self::InvalidCredentials => 400,

            // 401 Unauthorized (role gate included, per this system's convention)
            Self::MissingAuth | Self::InvalidToken | Self::TokenExpired | Self::NotCoach => 401,

            // 409 Conflict
            Self::Conflict(_) => 409,

            // 500 Internal Server Error
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,

            Self::Domain(e) => domain_status_code(e),
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingAuth => "MISSING_AUTH",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NotCoach => "NOT_COACH",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        let status = self.status_code();
        (400..500).contains(&status)
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        let status = self.status_code();
        (500..600).contains(&status)
    }

    /// Create a not found error for a resource type
    #[must_use]
    pub fn not_found(resource: impl fmt::Display) -> Self {
        Self::NotFound(resource.to_string())
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    /// Status code a domain error maps to (shared with the service layer)
    #[must_use]
    pub fn domain_status_code(e: &DomainError) -> u16 {
        domain_status_code(e)
    }
}

/// Status mapping for domain errors
///
/// Duplicate-resource conflicts are 409; booking-ledger invariant
/// violations surface as 400 on their routes.
fn domain_status_code(e: &DomainError) -> u16 {
    match e {
        DomainError::EmailAlreadyExists
        | DomainError::SkillAlreadyExists
        | DomainError::PackageAlreadyExists
        | DomainError::AlreadyCoach => 409,

        DomainError::DatabaseError(_) | DomainError::InternalError(_) => 500,

        // Not-found, validation, and ledger violations all report 400
        _ => 400,
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
