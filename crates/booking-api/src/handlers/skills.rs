//! Skill handlers

use axum::extract::{Path, State};
use booking_service::{CreateSkillRequest, SkillResponse, SkillService};

use crate::extractors::{SkillIdPath, ValidatedJson};
use crate::response::{ApiData, ApiResult};
use crate::state::AppState;

/// List all skills
///
/// GET /api/coaches/skill
pub async fn list_skills(State(state): State<AppState>) -> ApiResult<ApiData<Vec<SkillResponse>>> {
    let service = SkillService::new(state.service_context());
    let response = service.list_skills().await?;
    Ok(ApiData(response))
}

/// Add a new skill
///
/// POST /api/coaches/skill
pub async fn add_skill(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateSkillRequest>,
) -> ApiResult<ApiData<SkillResponse>> {
    let service = SkillService::new(state.service_context());
    let response = service.add_skill(request).await?;
    Ok(ApiData(response))
}

/// Delete a skill
///
/// DELETE /api/coaches/skill/:skill_id
pub async fn delete_skill(
    State(state): State<AppState>,
    Path(path): Path<SkillIdPath>,
) -> ApiResult<ApiData<()>> {
    let skill_id = path.skill_id()?;
    let service = SkillService::new(state.service_context());
    service.remove_skill(skill_id).await?;
    Ok(ApiData(()))
}
