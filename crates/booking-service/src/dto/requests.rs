//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation; field rules come from the canonical [`super::validation`]
//! module.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::validation::{validate_display_name, validate_http_url, validate_password};

// ============================================================================
// Auth Requests
// ============================================================================

/// User signup request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(custom(function = validate_display_name))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = validate_password))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = validate_password))]
    pub password: String,
}

/// Update display name request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(custom(function = validate_display_name))]
    pub name: String,
}

/// Change password request
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = validate_password_change))]
pub struct ChangePasswordRequest {
    #[validate(custom(function = validate_password))]
    pub password: String,

    #[validate(custom(function = validate_password))]
    pub new_password: String,

    #[validate(custom(function = validate_password))]
    pub confirm_new_password: String,
}

fn validate_password_change(request: &ChangePasswordRequest) -> Result<(), ValidationError> {
    if request.new_password == request.password {
        return Err(ValidationError::new("new_password_unchanged"));
    }
    if request.new_password != request.confirm_new_password {
        return Err(ValidationError::new("password_confirmation_mismatch"));
    }
    Ok(())
}

// ============================================================================
// Skill Requests
// ============================================================================

/// Create skill request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSkillRequest {
    #[validate(length(min = 1, max = 50, message = "Skill name must be 1-50 characters"))]
    pub name: String,
}

// ============================================================================
// Credit Package Requests
// ============================================================================

/// Create credit package request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCreditPackageRequest {
    #[validate(length(min = 1, max = 50, message = "Package name must be 1-50 characters"))]
    pub name: String,

    // Strictly positive: zero-credit packages and zero prices are rejected
    #[validate(range(min = 1, message = "Credit amount must be positive"))]
    pub credit_amount: i32,

    #[validate(range(exclusive_min = 0.0, message = "Price must be positive"))]
    pub price: f64,
}

// ============================================================================
// Course Requests
// ============================================================================

/// Create course request (coach only)
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = validate_course_window))]
pub struct CreateCourseRequest {
    pub skill_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Course name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,

    pub start_at: DateTime<Utc>,

    pub end_at: DateTime<Utc>,

    #[validate(range(min = 1, message = "Max participants must be positive"))]
    pub max_participants: i32,

    #[validate(custom(function = validate_optional_url))]
    pub meeting_url: Option<String>,
}

fn validate_course_window(request: &CreateCourseRequest) -> Result<(), ValidationError> {
    if request.start_at >= request.end_at {
        return Err(ValidationError::new("course_window_inverted"));
    }
    Ok(())
}

/// Update course request (coach only); same shape as creation
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = validate_update_window))]
pub struct UpdateCourseRequest {
    pub skill_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Course name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,

    pub start_at: DateTime<Utc>,

    pub end_at: DateTime<Utc>,

    #[validate(range(min = 1, message = "Max participants must be positive"))]
    pub max_participants: i32,

    #[validate(custom(function = validate_optional_url))]
    pub meeting_url: Option<String>,
}

fn validate_update_window(request: &UpdateCourseRequest) -> Result<(), ValidationError> {
    if request.start_at >= request.end_at {
        return Err(ValidationError::new("course_window_inverted"));
    }
    Ok(())
}

fn validate_optional_url(input: &str) -> Result<(), ValidationError> {
    validate_http_url(input)
}

// ============================================================================
// Coach Requests
// ============================================================================

/// Promote a user to coach
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PromoteCoachRequest {
    #[validate(range(min = 0, message = "Experience years must not be negative"))]
    pub experience_years: i32,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,

    #[validate(custom(function = validate_optional_url))]
    pub profile_image_url: Option<String>,
}

/// Update an existing coach profile, replacing linked skills wholesale
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCoachProfileRequest {
    #[validate(range(min = 0, message = "Experience years must not be negative"))]
    pub experience_years: i32,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,

    #[validate(custom(function = validate_http_url))]
    pub profile_image_url: String,

    #[validate(length(min = 1, message = "At least one skill is required"))]
    pub skill_ids: Vec<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_signup_request_validation() {
        let valid = SignupRequest {
            name: "amber".to_string(),
            email: "amber@example.com".to_string(),
            password: "SecurePass1".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_name = SignupRequest {
            name: "9lives".to_string(),
            ..valid.clone()
        };
        assert!(bad_name.validate().is_err());

        let bad_email = SignupRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let weak_password = SignupRequest {
            password: "weak".to_string(),
            ..valid
        };
        assert!(weak_password.validate().is_err());
    }

    #[test]
    fn test_change_password_cross_field_rules() {
        let base = ChangePasswordRequest {
            password: "OldSecret12".to_string(),
            new_password: "NewSecret12".to_string(),
            confirm_new_password: "NewSecret12".to_string(),
        };
        assert!(base.validate().is_ok());

        let unchanged = ChangePasswordRequest {
            new_password: "OldSecret12".to_string(),
            confirm_new_password: "OldSecret12".to_string(),
            ..base.clone()
        };
        assert!(unchanged.validate().is_err());

        let mismatch = ChangePasswordRequest {
            confirm_new_password: "Different12".to_string(),
            ..base
        };
        assert!(mismatch.validate().is_err());
    }

    #[test]
    fn test_course_window_must_be_ordered() {
        let now = chrono::Utc::now();
        let mut request = CreateCourseRequest {
            skill_id: Uuid::new_v4(),
            name: "Yoga".to_string(),
            description: "Stretching".to_string(),
            start_at: now + Duration::days(1),
            end_at: now + Duration::days(2),
            max_participants: 10,
            meeting_url: Some("https://example.com/meet".to_string()),
        };
        assert!(request.validate().is_ok());

        request.end_at = request.start_at - Duration::hours(1);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_credit_package_strict_positive() {
        let zero_credits = CreateCreditPackageRequest {
            name: "Starter".to_string(),
            credit_amount: 0,
            price: 100.0,
        };
        assert!(zero_credits.validate().is_err());

        let zero_price = CreateCreditPackageRequest {
            name: "Starter".to_string(),
            credit_amount: 5,
            price: 0.0,
        };
        assert!(zero_price.validate().is_err());

        let ok = CreateCreditPackageRequest {
            name: "Starter".to_string(),
            credit_amount: 5,
            price: 100.0,
        };
        assert!(ok.validate().is_ok());
    }
}
