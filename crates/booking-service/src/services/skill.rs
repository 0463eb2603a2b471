//! Skill service - admin-managed specialty list

use tracing::{info, instrument};
use uuid::Uuid;

use booking_core::entities::Skill;

use crate::dto::{CreateSkillRequest, SkillResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Skill service
pub struct SkillService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SkillService<'a> {
    /// Create a new SkillService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all skills
    #[instrument(skip(self))]
    pub async fn list_skills(&self) -> ServiceResult<Vec<SkillResponse>> {
        let skills = self.ctx.skill_repo().list().await?;
        Ok(skills.iter().map(SkillResponse::from).collect())
    }

    /// Add a new skill; the name must be unique
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn add_skill(&self, request: CreateSkillRequest) -> ServiceResult<SkillResponse> {
        if self.ctx.skill_repo().name_exists(&request.name).await? {
            return Err(ServiceError::conflict("Skill name already exists"));
        }

        let skill = Skill::new(Uuid::new_v4(), request.name);
        self.ctx.skill_repo().create(&skill).await?;

        info!(skill_id = %skill.id, "Skill created");

        Ok(SkillResponse::from(&skill))
    }

    /// Delete a skill by id
    #[instrument(skip(self))]
    pub async fn remove_skill(&self, skill_id: Uuid) -> ServiceResult<()> {
        self.ctx.skill_repo().delete(skill_id).await?;
        info!(skill_id = %skill_id, "Skill deleted");
        Ok(())
    }
}
