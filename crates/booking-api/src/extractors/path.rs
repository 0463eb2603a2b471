//! Path parameter extractors
//!
//! Type-safe extraction of UUID ids from path parameters. Malformed ids
//! reject with 400 before any handler logic runs.

use uuid::Uuid;

use crate::response::ApiError;

/// Path parameters with course_id
#[derive(Debug, serde::Deserialize)]
pub struct CourseIdPath {
    pub course_id: String,
}

impl CourseIdPath {
    /// Parse course_id as Uuid
    pub fn course_id(&self) -> Result<Uuid, ApiError> {
        parse_uuid(&self.course_id, "Invalid course id")
    }
}

/// Path parameters with skill_id
#[derive(Debug, serde::Deserialize)]
pub struct SkillIdPath {
    pub skill_id: String,
}

impl SkillIdPath {
    /// Parse skill_id as Uuid
    pub fn skill_id(&self) -> Result<Uuid, ApiError> {
        parse_uuid(&self.skill_id, "Invalid skill id")
    }
}

/// Path parameters with credit_package_id
#[derive(Debug, serde::Deserialize)]
pub struct CreditPackageIdPath {
    pub credit_package_id: String,
}

impl CreditPackageIdPath {
    /// Parse credit_package_id as Uuid
    pub fn credit_package_id(&self) -> Result<Uuid, ApiError> {
        parse_uuid(&self.credit_package_id, "Invalid credit package id")
    }
}

/// Path parameters with coach_id
#[derive(Debug, serde::Deserialize)]
pub struct CoachIdPath {
    pub coach_id: String,
}

impl CoachIdPath {
    /// Parse coach_id as Uuid
    pub fn coach_id(&self) -> Result<Uuid, ApiError> {
        parse_uuid(&self.coach_id, "Invalid coach id")
    }
}

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as Uuid
    pub fn user_id(&self) -> Result<Uuid, ApiError> {
        parse_uuid(&self.user_id, "Invalid user id")
    }
}

fn parse_uuid(input: &str, message: &str) -> Result<Uuid, ApiError> {
    input
        .parse()
        .map_err(|_| ApiError::invalid_path(message.to_string()))
}
