//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Services receive the implementations
//! through an injected context, never through ambient/global lookup.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{Coach, Course, CreditPackage, CreditPurchase, Skill, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Public course listing row joined with coach and skill names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseListing {
    pub id: Uuid,
    pub coach_name: String,
    pub skill_name: String,
    pub name: String,
    pub description: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub max_participants: i32,
}

/// Course row as seen by its owning coach (no join payload)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedCourse {
    pub id: Uuid,
    pub name: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub max_participants: i32,
}

/// One row of a user's purchase history, joined with the package name
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRecord {
    pub purchased_credits: i32,
    pub price_paid: f64,
    pub name: String,
    pub purchase_at: DateTime<Utc>,
}

/// Aggregate over all credit packages, used for average-price revenue math
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreditPriceStats {
    pub total_credits: i64,
    pub total_price: f64,
}

impl CreditPriceStats {
    /// Average price of one credit; zero when no credits are on sale
    #[must_use]
    pub fn avg_price_per_credit(&self) -> f64 {
        if self.total_credits > 0 {
            self.total_price / self.total_credits as f64
        } else {
            0.0
        }
    }
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update the display name; fails with `UpdateFailed` when no row matched
    async fn update_name(&self, id: Uuid, name: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: Uuid, password_hash: &str) -> RepoResult<()>;

    /// Transition role USER -> COACH
    ///
    /// Conditional on the current role still being USER; a lost race or an
    /// already-promoted user fails with `RoleTransitionFailed`.
    async fn promote_to_coach(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Coach Repository
// ============================================================================

#[async_trait]
pub trait CoachRepository: Send + Sync {
    /// Find coach by its own id
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Coach>>;

    /// Find the coach row belonging to a user account
    async fn find_by_user_id(&self, user_id: Uuid) -> RepoResult<Option<Coach>>;

    /// Page through coaches joined with their user names, newest first
    async fn list(&self, offset: i64, limit: i64) -> RepoResult<Vec<(Uuid, String)>>;

    /// Create a coach profile for a freshly promoted user
    async fn create(&self, coach: &Coach) -> RepoResult<()>;

    /// Update the mutable profile fields
    async fn update_profile(
        &self,
        user_id: Uuid,
        experience_years: i32,
        description: &str,
        profile_image_url: Option<&str>,
    ) -> RepoResult<()>;

    /// Replace the coach's linked skills wholesale
    async fn replace_skills(&self, coach_id: Uuid, skill_ids: &[Uuid]) -> RepoResult<()>;

    /// Skill ids currently linked to a coach
    async fn skill_ids(&self, coach_id: Uuid) -> RepoResult<Vec<Uuid>>;
}

// ============================================================================
// Skill Repository
// ============================================================================

#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// List all skills
    async fn list(&self) -> RepoResult<Vec<Skill>>;

    /// Find skill by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Skill>>;

    /// Check if a skill name is already taken
    async fn name_exists(&self, name: &str) -> RepoResult<bool>;

    /// Create a new skill
    async fn create(&self, skill: &Skill) -> RepoResult<()>;

    /// Delete a skill; fails with `SkillNotFound` when no row matched
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Course Repository
// ============================================================================

#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Find course by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Course>>;

    /// Public catalogue joined with coach and skill names
    async fn list_public(&self) -> RepoResult<Vec<CourseListing>>;

    /// Courses published by one coach, joined for the public catalogue shape
    async fn list_by_coach_user(&self, user_id: Uuid) -> RepoResult<Vec<CourseListing>>;

    /// Create a new course
    async fn create(&self, course: &Course) -> RepoResult<()>;

    /// Update a course owned by `user_id`; `UpdateFailed` when no row matched
    async fn update(&self, course: &Course) -> RepoResult<()>;

    /// Courses owned by a coach's user account
    async fn list_owned(&self, user_id: Uuid) -> RepoResult<Vec<OwnedCourse>>;

    /// One owned course joined with its skill name
    async fn find_owned_detail(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> RepoResult<Option<(Course, String)>>;

    /// Ids of the coach's courses starting inside `[from, to)`
    async fn ids_starting_between(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepoResult<Vec<Uuid>>;
}

// ============================================================================
// Booking Repository (the booking ledger's storage port)
// ============================================================================

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Atomically create an active booking for (user, course)
    ///
    /// The implementation must evaluate, inside one serializable unit against
    /// the insert:
    /// 1. course existence         -> `CourseNotFound`
    /// 2. course not ended         -> `CourseEnded`
    /// 3. no active duplicate      -> `AlreadyBooked`
    /// 4. seats below capacity     -> `CourseFull`
    /// 5. credits not exhausted    -> `InsufficientCredits`
    ///
    /// Two concurrent calls racing for the last seat or last credit must not
    /// both succeed.
    async fn book(&self, user_id: Uuid, course_id: Uuid) -> RepoResult<()>;

    /// Cancel the active booking for (user, course)
    ///
    /// `BookingNotFound` when no active booking exists; `CancelFailed` when a
    /// concurrent cancellation won the conditional update.
    async fn cancel(&self, user_id: Uuid, course_id: Uuid) -> RepoResult<()>;

    /// Number of active bookings holding seats on a course
    async fn active_count_for_course(&self, course_id: Uuid) -> RepoResult<i64>;

    /// Number of active bookings consuming a user's credits
    async fn active_count_for_user(&self, user_id: Uuid) -> RepoResult<i64>;

    /// Total active bookings across a set of courses (revenue reporting)
    async fn active_count_for_courses(&self, course_ids: &[Uuid]) -> RepoResult<i64>;
}

// ============================================================================
// Credit Package Repository
// ============================================================================

#[async_trait]
pub trait CreditPackageRepository: Send + Sync {
    /// List all packages
    async fn list(&self) -> RepoResult<Vec<CreditPackage>>;

    /// Find package by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<CreditPackage>>;

    /// Check if a package name is already taken
    async fn name_exists(&self, name: &str) -> RepoResult<bool>;

    /// Create a new package
    async fn create(&self, package: &CreditPackage) -> RepoResult<()>;

    /// Delete a package; `CreditPackageNotFound` when no row matched
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Aggregate credits and price over every package on sale
    async fn price_stats(&self) -> RepoResult<CreditPriceStats>;
}

// ============================================================================
// Credit Purchase Repository
// ============================================================================

#[async_trait]
pub trait CreditPurchaseRepository: Send + Sync {
    /// Append a purchase record
    async fn create(&self, purchase: &CreditPurchase) -> RepoResult<()>;

    /// Sum of credits the user has ever purchased (0 when none)
    async fn purchased_credits(&self, user_id: Uuid) -> RepoResult<i64>;

    /// Purchase history joined with package names, newest first
    async fn history(&self, user_id: Uuid) -> RepoResult<Vec<PurchaseRecord>>;
}
