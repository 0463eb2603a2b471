//! Error handling utilities for repositories

use booking_core::error::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: Uuid) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "course not found" error
pub fn course_not_found(id: Uuid) -> DomainError {
    DomainError::CourseNotFound(id)
}

/// Create a "skill not found" error
pub fn skill_not_found(id: Uuid) -> DomainError {
    DomainError::SkillNotFound(id)
}

/// Create a "credit package not found" error
pub fn package_not_found(id: Uuid) -> DomainError {
    DomainError::CreditPackageNotFound(id)
}
