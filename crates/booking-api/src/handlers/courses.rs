//! Course handlers
//!
//! Public catalogue plus booking and cancellation (any authenticated user).

use axum::extract::{Path, State};
use booking_service::{CourseListItem, CourseService};

use crate::extractors::{AuthUser, CourseIdPath};
use crate::response::{ApiData, ApiResult, Created};
use crate::state::AppState;

/// Public course catalogue
///
/// GET /api/courses
pub async fn list_courses(
    State(state): State<AppState>,
) -> ApiResult<ApiData<Vec<CourseListItem>>> {
    let service = CourseService::new(state.service_context());
    let response = service.list_courses().await?;
    Ok(ApiData(response))
}

/// Book a course for the acting user
///
/// POST /api/courses/:course_id
pub async fn book_course(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CourseIdPath>,
) -> ApiResult<Created<()>> {
    let course_id = path.course_id()?;
    let service = CourseService::new(state.service_context());
    service.book_course(auth.user_id(), course_id).await?;
    Ok(Created(()))
}

/// Cancel the acting user's booking for a course
///
/// DELETE /api/courses/:course_id
pub async fn cancel_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CourseIdPath>,
) -> ApiResult<ApiData<()>> {
    let course_id = path.course_id()?;
    let service = CourseService::new(state.service_context());
    service.cancel_booking(auth.user_id(), course_id).await?;
    Ok(ApiData(()))
}
