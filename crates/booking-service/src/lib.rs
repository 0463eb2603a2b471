//! # booking-service
//!
//! Application layer: request/response DTOs and the services implementing
//! the platform's use cases. Services receive every dependency through
//! [`ServiceContext`]; nothing is resolved from ambient state.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    ChangePasswordRequest, CoachDetailResponse, CoachListItem, CoachProfileResponse,
    CourseListItem, CourseResponse, CreateCourseRequest, CreateCreditPackageRequest,
    CreateSkillRequest, CreditPackageResponse, LoginRequest, LoginResponse, OwnedCourseDetail,
    OwnedCourseItem, ProfileResponse, PromoteCoachRequest, PromoteCoachResponse,
    PurchaseHistoryItem, RevenueResponse, RevenueTotals, SignupRequest, SignupResponse,
    SkillResponse, UpdateCoachProfileRequest, UpdateCourseRequest, UpdateProfileRequest,
    UpdatedNameResponse, UserSummary,
};
pub use services::{
    AuthService, CoachAdminService, CoachService, CourseService, CreditBalance,
    CreditPackageService, CreditService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, SkillService,
};
