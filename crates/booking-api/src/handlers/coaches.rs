//! Public coach catalogue handlers

use axum::extract::{Path, State};
use booking_service::{CoachDetailResponse, CoachListItem, CoachService, CourseListItem};

use crate::extractors::{CoachIdPath, PageQuery};
use crate::response::{ApiData, ApiResult};
use crate::state::AppState;

/// Paged coach catalogue
///
/// GET /api/coaches?per=&page=
pub async fn list_coaches(
    State(state): State<AppState>,
    page: PageQuery,
) -> ApiResult<ApiData<Vec<CoachListItem>>> {
    let service = CoachService::new(state.service_context());
    let response = service.list_coaches(page.per, page.page).await?;
    Ok(ApiData(response))
}

/// Public coach detail
///
/// GET /api/coaches/:coach_id
pub async fn coach_detail(
    State(state): State<AppState>,
    Path(path): Path<CoachIdPath>,
) -> ApiResult<ApiData<CoachDetailResponse>> {
    let coach_id = path.coach_id()?;
    let service = CoachService::new(state.service_context());
    let response = service.coach_detail(coach_id).await?;
    Ok(ApiData(response))
}

/// Public listing of one coach's courses
///
/// GET /api/coaches/:coach_id/courses
pub async fn coach_courses(
    State(state): State<AppState>,
    Path(path): Path<CoachIdPath>,
) -> ApiResult<ApiData<Vec<CourseListItem>>> {
    let coach_id = path.coach_id()?;
    let service = CoachService::new(state.service_context());
    let response = service.coach_courses(coach_id).await?;
    Ok(ApiData(response))
}
