//! Skill entity <-> model mapper

use booking_core::entities::Skill;

use crate::models::SkillModel;

impl From<SkillModel> for Skill {
    fn from(model: SkillModel) -> Self {
        Skill {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
        }
    }
}
