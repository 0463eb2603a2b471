//! Data transfer objects
//!
//! Request DTOs carry `validator` derives backed by the canonical field
//! validators in [`validation`]; response DTOs serialize the wire shapes.

pub mod validation;

mod requests;
mod responses;

pub use requests::{
    ChangePasswordRequest, CreateCourseRequest, CreateCreditPackageRequest, CreateSkillRequest,
    LoginRequest, PromoteCoachRequest, SignupRequest, UpdateCoachProfileRequest,
    UpdateCourseRequest, UpdateProfileRequest,
};
pub use responses::{
    CoachDetailResponse, CoachListItem, CoachProfileResponse, CoachSummary, CourseListItem,
    CourseResponse, CreditPackageResponse, LoginResponse, OwnedCourseDetail, OwnedCourseItem,
    ProfileResponse, PromoteCoachResponse, PurchaseHistoryItem, RevenueResponse, RevenueTotals,
    SignupResponse, SkillResponse, UpdatedNameResponse, UserSummary,
};
