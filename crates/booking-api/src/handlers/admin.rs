//! Coach administration handlers
//!
//! Promotion is open per this API's convention; every other route here sits
//! behind the coach role gate.

use axum::extract::{Path, Query, State};
use serde::Deserialize;

use booking_service::{
    CoachAdminService, CoachProfileResponse, CourseResponse, CreateCourseRequest,
    OwnedCourseDetail, OwnedCourseItem, PromoteCoachRequest, PromoteCoachResponse,
    RevenueResponse, UpdateCoachProfileRequest, UpdateCourseRequest,
};

use crate::extractors::{CoachUser, CourseIdPath, UserIdPath, ValidatedJson};
use crate::response::{ApiData, ApiError, ApiResult, Created};
use crate::state::AppState;

/// Promote a user to coach
///
/// POST /api/admin/coaches/:user_id
pub async fn promote_user(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
    ValidatedJson(request): ValidatedJson<PromoteCoachRequest>,
) -> ApiResult<Created<PromoteCoachResponse>> {
    let user_id = path.user_id()?;
    let service = CoachAdminService::new(state.service_context());
    let response = service.promote_user(user_id, request).await?;
    Ok(Created(response))
}

/// Create a course owned by the acting coach
///
/// POST /api/admin/coaches/courses
pub async fn create_course(
    State(state): State<AppState>,
    coach: CoachUser,
    ValidatedJson(request): ValidatedJson<CreateCourseRequest>,
) -> ApiResult<Created<CourseResponse>> {
    let service = CoachAdminService::new(state.service_context());
    let response = service.create_course(coach.user_id(), request).await?;
    Ok(Created(response))
}

/// Update a course owned by the acting coach
///
/// PUT /api/admin/coaches/courses/:course_id
pub async fn update_course(
    State(state): State<AppState>,
    coach: CoachUser,
    Path(path): Path<CourseIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateCourseRequest>,
) -> ApiResult<ApiData<CourseResponse>> {
    let course_id = path.course_id()?;
    let service = CoachAdminService::new(state.service_context());
    let response = service.update_course(coach.user_id(), course_id, request).await?;
    Ok(ApiData(response))
}

/// The acting coach's course list
///
/// GET /api/admin/coaches/courses
pub async fn owned_courses(
    State(state): State<AppState>,
    coach: CoachUser,
) -> ApiResult<ApiData<Vec<OwnedCourseItem>>> {
    let service = CoachAdminService::new(state.service_context());
    let response = service.owned_courses(coach.user_id()).await?;
    Ok(ApiData(response))
}

/// Detail of one of the acting coach's courses
///
/// GET /api/admin/coaches/courses/:course_id
pub async fn owned_course_detail(
    State(state): State<AppState>,
    coach: CoachUser,
    Path(path): Path<CourseIdPath>,
) -> ApiResult<ApiData<OwnedCourseDetail>> {
    let course_id = path.course_id()?;
    let service = CoachAdminService::new(state.service_context());
    let response = service.owned_course_detail(coach.user_id(), course_id).await?;
    Ok(ApiData(response))
}

/// The acting coach's own profile
///
/// GET /api/admin/coaches
pub async fn own_profile(
    State(state): State<AppState>,
    coach: CoachUser,
) -> ApiResult<ApiData<CoachProfileResponse>> {
    let service = CoachAdminService::new(state.service_context());
    let response = service.own_profile(coach.user_id()).await?;
    Ok(ApiData(response))
}

/// Update the acting coach's profile
///
/// PUT /api/admin/coaches
pub async fn update_profile(
    State(state): State<AppState>,
    coach: CoachUser,
    ValidatedJson(request): ValidatedJson<UpdateCoachProfileRequest>,
) -> ApiResult<Created<CoachProfileResponse>> {
    let service = CoachAdminService::new(state.service_context());
    let response = service.update_profile(coach.user_id(), request).await?;
    Ok(Created(response))
}

/// Revenue query parameters
#[derive(Debug, Deserialize)]
pub struct RevenueQuery {
    pub month: Option<String>,
}

/// Monthly revenue report for the acting coach
///
/// GET /api/admin/coaches/revenue?month=
pub async fn monthly_revenue(
    State(state): State<AppState>,
    coach: CoachUser,
    Query(query): Query<RevenueQuery>,
) -> ApiResult<ApiData<RevenueResponse>> {
    let month = query
        .month
        .ok_or_else(|| ApiError::invalid_query("'month' is required"))?;

    let service = CoachAdminService::new(state.service_context());
    let response = service.monthly_revenue(coach.user_id(), &month).await?;
    Ok(ApiData(response))
}
