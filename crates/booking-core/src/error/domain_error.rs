//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Coach not found")]
    CoachNotFound,

    #[error("Skill not found: {0}")]
    SkillNotFound(Uuid),

    #[error("Course not found: {0}")]
    CourseNotFound(Uuid),

    #[error("Credit package not found: {0}")]
    CreditPackageNotFound(Uuid),

    #[error("Booking not found")]
    BookingNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Skill name already exists")]
    SkillAlreadyExists,

    #[error("Credit package name already exists")]
    PackageAlreadyExists,

    #[error("User is already a coach")]
    AlreadyCoach,

    #[error("Course already booked")]
    AlreadyBooked,

    // =========================================================================
    // Business Rule Violations (booking ledger)
    // =========================================================================
    #[error("Course has ended and cannot be booked")]
    CourseEnded,

    #[error("Course has reached its maximum participants")]
    CourseFull,

    #[error("No remaining booking credits")]
    InsufficientCredits,

    #[error("Booking cancellation failed")]
    CancelFailed,

    #[error("Role transition failed")]
    RoleTransitionFailed,

    #[error("Update affected no rows")]
    UpdateFailed,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::CoachNotFound => "UNKNOWN_COACH",
            Self::SkillNotFound(_) => "UNKNOWN_SKILL",
            Self::CourseNotFound(_) => "UNKNOWN_COURSE",
            Self::CreditPackageNotFound(_) => "UNKNOWN_CREDIT_PACKAGE",
            Self::BookingNotFound => "UNKNOWN_BOOKING",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::SkillAlreadyExists => "SKILL_ALREADY_EXISTS",
            Self::PackageAlreadyExists => "PACKAGE_ALREADY_EXISTS",
            Self::AlreadyCoach => "ALREADY_COACH",
            Self::AlreadyBooked => "ALREADY_BOOKED",

            // Business Rules
            Self::CourseEnded => "COURSE_ENDED",
            Self::CourseFull => "COURSE_FULL",
            Self::InsufficientCredits => "INSUFFICIENT_CREDITS",
            Self::CancelFailed => "CANCEL_FAILED",
            Self::RoleTransitionFailed => "ROLE_TRANSITION_FAILED",
            Self::UpdateFailed => "UPDATE_FAILED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::CoachNotFound
                | Self::SkillNotFound(_)
                | Self::CourseNotFound(_)
                | Self::CreditPackageNotFound(_)
                | Self::BookingNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this is a conflict with existing state
    ///
    /// Booking-invariant violations (full course, spent credits, ended
    /// course) are conflicts too; the transport layer decides which of them
    /// map to 400 and which to 409.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::SkillAlreadyExists
                | Self::PackageAlreadyExists
                | Self::AlreadyCoach
                | Self::AlreadyBooked
                | Self::CourseEnded
                | Self::CourseFull
                | Self::InsufficientCredits
                | Self::CancelFailed
                | Self::RoleTransitionFailed
                | Self::UpdateFailed
        )
    }

    /// Check if this error must surface as an opaque 500
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::InternalError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(DomainError::CourseNotFound(Uuid::new_v4()).is_not_found());
        assert!(DomainError::AlreadyBooked.is_conflict());
        assert!(DomainError::CourseFull.is_conflict());
        assert!(DomainError::InsufficientCredits.is_conflict());
        assert!(DomainError::ValidationError("bad".into()).is_validation());
        assert!(DomainError::DatabaseError("down".into()).is_internal());
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(DomainError::AlreadyBooked.code(), "ALREADY_BOOKED");
        assert_eq!(DomainError::CourseFull.code(), "COURSE_FULL");
        assert_eq!(DomainError::InsufficientCredits.code(), "INSUFFICIENT_CREDITS");
        assert_eq!(DomainError::CancelFailed.code(), "CANCEL_FAILED");
    }
}
