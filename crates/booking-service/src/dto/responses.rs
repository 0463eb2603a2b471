//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. These are the
//! `data` payloads; the `{status, data, message}` envelope is applied by the
//! transport layer.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use booking_core::entities::{Coach, Course, CreditPackage, Skill, User};
use booking_core::traits::{CourseListing, PurchaseRecord};
use booking_core::value_objects::{CourseStatus, UserRole};

// ============================================================================
// Auth / User Responses
// ============================================================================

/// Minimal user payload returned at signup
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
}

/// Signup response
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub user: UserSummary,
}

impl SignupResponse {
    #[must_use]
    pub fn new(user: &User) -> Self {
        Self {
            user: UserSummary {
                id: user.id,
                name: user.name.clone(),
            },
        }
    }
}

/// Login response carrying the bearer token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub name: String,
}

impl LoginResponse {
    #[must_use]
    pub fn new(token: String, name: String) -> Self {
        Self {
            token,
            user: LoginUser { name },
        }
    }
}

/// Own profile payload
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub email: String,
    pub name: String,
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

/// Payload after a display-name update
#[derive(Debug, Serialize)]
pub struct UpdatedNameResponse {
    pub name: String,
}

/// One row of the purchase history
#[derive(Debug, Serialize)]
pub struct PurchaseHistoryItem {
    pub purchased_credits: i32,
    pub price_paid: f64,
    pub name: String,
    pub purchase_at: DateTime<Utc>,
}

impl From<PurchaseRecord> for PurchaseHistoryItem {
    fn from(record: PurchaseRecord) -> Self {
        Self {
            purchased_credits: record.purchased_credits,
            price_paid: record.price_paid,
            name: record.name,
            purchase_at: record.purchase_at,
        }
    }
}

// ============================================================================
// Course Responses
// ============================================================================

/// Public catalogue row
#[derive(Debug, Serialize)]
pub struct CourseListItem {
    pub id: Uuid,
    pub coach_name: String,
    pub skill_name: String,
    pub name: String,
    pub description: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub max_participants: i32,
}

impl From<CourseListing> for CourseListItem {
    fn from(listing: CourseListing) -> Self {
        Self {
            id: listing.id,
            coach_name: listing.coach_name,
            skill_name: listing.skill_name,
            name: listing.name,
            description: listing.description,
            start_at: listing.start_at,
            end_at: listing.end_at,
            max_participants: listing.max_participants,
        }
    }
}

/// Full course payload returned on create/update
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub skill_id: Uuid,
    pub name: String,
    pub description: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub max_participants: i32,
    pub meeting_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Course> for CourseResponse {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id,
            user_id: course.user_id,
            skill_id: course.skill_id,
            name: course.name.clone(),
            description: course.description.clone(),
            start_at: course.start_at,
            end_at: course.end_at,
            max_participants: course.max_participants,
            meeting_url: course.meeting_url.clone(),
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

/// Owned-course list row with derived status and live participant count
#[derive(Debug, Serialize)]
pub struct OwnedCourseItem {
    pub id: Uuid,
    pub name: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub max_participants: i32,
    pub status: CourseStatus,
    pub participants: i64,
}

/// Owned-course detail row joined with its skill name
#[derive(Debug, Serialize)]
pub struct OwnedCourseDetail {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub max_participants: i32,
    pub skill_name: String,
}

// ============================================================================
// Skill / Credit Package Responses
// ============================================================================

/// Skill payload
#[derive(Debug, Serialize)]
pub struct SkillResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<&Skill> for SkillResponse {
    fn from(skill: &Skill) -> Self {
        Self {
            id: skill.id,
            name: skill.name.clone(),
        }
    }
}

/// Credit package payload
#[derive(Debug, Serialize)]
pub struct CreditPackageResponse {
    pub id: Uuid,
    pub name: String,
    pub credit_amount: i32,
    pub price: f64,
}

impl From<&CreditPackage> for CreditPackageResponse {
    fn from(package: &CreditPackage) -> Self {
        Self {
            id: package.id,
            name: package.name.clone(),
            credit_amount: package.credit_amount,
            price: package.price,
        }
    }
}

// ============================================================================
// Coach Responses
// ============================================================================

/// Public coach catalogue row
#[derive(Debug, Serialize)]
pub struct CoachListItem {
    pub id: Uuid,
    pub name: String,
}

/// Coach payload used by detail and promotion responses
#[derive(Debug, Serialize)]
pub struct CoachSummary {
    pub id: Uuid,
    pub user_id: Uuid,
    pub experience_years: i32,
    pub description: String,
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Coach> for CoachSummary {
    fn from(coach: &Coach) -> Self {
        Self {
            id: coach.id,
            user_id: coach.user_id,
            experience_years: coach.experience_years,
            description: coach.description.clone(),
            profile_image_url: coach.profile_image_url.clone(),
            created_at: coach.created_at,
            updated_at: coach.updated_at,
        }
    }
}

/// Public coach detail: the user's name/role plus the coach row
#[derive(Debug, Serialize)]
pub struct CoachDetailResponse {
    pub user: CoachDetailUser,
    pub coach: CoachSummary,
}

#[derive(Debug, Serialize)]
pub struct CoachDetailUser {
    pub name: String,
    pub role: UserRole,
}

impl CoachDetailResponse {
    #[must_use]
    pub fn new(user: &User, coach: &Coach) -> Self {
        Self {
            user: CoachDetailUser {
                name: user.name.clone(),
                role: user.role,
            },
            coach: CoachSummary::from(coach),
        }
    }
}

/// Promotion response: the transitioned user plus the new coach row
#[derive(Debug, Serialize)]
pub struct PromoteCoachResponse {
    pub user: CoachDetailUser,
    pub coach: CoachSummary,
}

impl PromoteCoachResponse {
    #[must_use]
    pub fn new(user: &User, coach: &Coach) -> Self {
        Self {
            user: CoachDetailUser {
                name: user.name.clone(),
                role: user.role,
            },
            coach: CoachSummary::from(coach),
        }
    }
}

/// Coach's own profile with linked skill ids
#[derive(Debug, Serialize)]
pub struct CoachProfileResponse {
    pub id: Uuid,
    pub experience_years: i32,
    pub description: String,
    pub profile_image_url: Option<String>,
    pub skill_ids: Vec<Uuid>,
}

// ============================================================================
// Revenue Responses
// ============================================================================

/// Monthly revenue totals
#[derive(Debug, Serialize)]
pub struct RevenueTotals {
    pub participants: i64,
    pub revenue: f64,
    pub course_count: usize,
}

/// Monthly revenue response
#[derive(Debug, Serialize)]
pub struct RevenueResponse {
    pub total: RevenueTotals,
}

impl RevenueResponse {
    /// Empty report for a month with no courses
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total: RevenueTotals {
                participants: 0,
                revenue: 0.0,
                course_count: 0,
            },
        }
    }
}
