//! Service context - dependency container for services
//!
//! Holds all repositories and shared services needed by the use-case layer.
//! Everything is injected here once at startup; services never reach for
//! ambient or global handles.

use std::sync::Arc;

use booking_common::auth::{JwtService, PasswordService};
use booking_core::traits::{
    BookingRepository, CoachRepository, CourseRepository, CreditPackageRepository,
    CreditPurchaseRepository, SkillRepository, UserRepository,
};
use booking_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories (trait objects, so tests can inject doubles)
/// - JWT service for authentication
/// - Password hashing service
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    coach_repo: Arc<dyn CoachRepository>,
    skill_repo: Arc<dyn SkillRepository>,
    course_repo: Arc<dyn CourseRepository>,
    booking_repo: Arc<dyn BookingRepository>,
    credit_package_repo: Arc<dyn CreditPackageRepository>,
    credit_purchase_repo: Arc<dyn CreditPurchaseRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    password_service: PasswordService,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        coach_repo: Arc<dyn CoachRepository>,
        skill_repo: Arc<dyn SkillRepository>,
        course_repo: Arc<dyn CourseRepository>,
        booking_repo: Arc<dyn BookingRepository>,
        credit_package_repo: Arc<dyn CreditPackageRepository>,
        credit_purchase_repo: Arc<dyn CreditPurchaseRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            coach_repo,
            skill_repo,
            course_repo,
            booking_repo,
            credit_package_repo,
            credit_purchase_repo,
            jwt_service,
            password_service: PasswordService::new(),
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the coach repository
    pub fn coach_repo(&self) -> &dyn CoachRepository {
        self.coach_repo.as_ref()
    }

    /// Get the skill repository
    pub fn skill_repo(&self) -> &dyn SkillRepository {
        self.skill_repo.as_ref()
    }

    /// Get the course repository
    pub fn course_repo(&self) -> &dyn CourseRepository {
        self.course_repo.as_ref()
    }

    /// Get the booking repository (the booking ledger's storage port)
    pub fn booking_repo(&self) -> &dyn BookingRepository {
        self.booking_repo.as_ref()
    }

    /// Get the credit package repository
    pub fn credit_package_repo(&self) -> &dyn CreditPackageRepository {
        self.credit_package_repo.as_ref()
    }

    /// Get the credit purchase repository
    pub fn credit_purchase_repo(&self) -> &dyn CreditPurchaseRepository {
        self.credit_purchase_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the password hashing service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    coach_repo: Option<Arc<dyn CoachRepository>>,
    skill_repo: Option<Arc<dyn SkillRepository>>,
    course_repo: Option<Arc<dyn CourseRepository>>,
    booking_repo: Option<Arc<dyn BookingRepository>>,
    credit_package_repo: Option<Arc<dyn CreditPackageRepository>>,
    credit_purchase_repo: Option<Arc<dyn CreditPurchaseRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            coach_repo: None,
            skill_repo: None,
            course_repo: None,
            booking_repo: None,
            credit_package_repo: None,
            credit_purchase_repo: None,
            jwt_service: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn coach_repo(mut self, repo: Arc<dyn CoachRepository>) -> Self {
        self.coach_repo = Some(repo);
        self
    }

    pub fn skill_repo(mut self, repo: Arc<dyn SkillRepository>) -> Self {
        self.skill_repo = Some(repo);
        self
    }

    pub fn course_repo(mut self, repo: Arc<dyn CourseRepository>) -> Self {
        self.course_repo = Some(repo);
        self
    }

    pub fn booking_repo(mut self, repo: Arc<dyn BookingRepository>) -> Self {
        self.booking_repo = Some(repo);
        self
    }

    pub fn credit_package_repo(mut self, repo: Arc<dyn CreditPackageRepository>) -> Self {
        self.credit_package_repo = Some(repo);
        self
    }

    pub fn credit_purchase_repo(mut self, repo: Arc<dyn CreditPurchaseRepository>) -> Self {
        self.credit_purchase_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool.ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.coach_repo.ok_or_else(|| ServiceError::validation("coach_repo is required"))?,
            self.skill_repo.ok_or_else(|| ServiceError::validation("skill_repo is required"))?,
            self.course_repo.ok_or_else(|| ServiceError::validation("course_repo is required"))?,
            self.booking_repo.ok_or_else(|| ServiceError::validation("booking_repo is required"))?,
            self.credit_package_repo
                .ok_or_else(|| ServiceError::validation("credit_package_repo is required"))?,
            self.credit_purchase_repo
                .ok_or_else(|| ServiceError::validation("credit_purchase_repo is required"))?,
            self.jwt_service.ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
