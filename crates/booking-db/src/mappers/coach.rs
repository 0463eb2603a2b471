//! Coach entity <-> model mapper

use booking_core::entities::Coach;

use crate::models::CoachModel;

impl From<CoachModel> for Coach {
    fn from(model: CoachModel) -> Self {
        Coach {
            id: model.id,
            user_id: model.user_id,
            experience_years: model.experience_years,
            description: model.description,
            profile_image_url: model.profile_image_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
