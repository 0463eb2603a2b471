//! Coach entity - profile record created when a user is promoted

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Coach profile, one-to-one with a promoted user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coach {
    pub id: Uuid,
    pub user_id: Uuid,
    pub experience_years: i32,
    pub description: String,
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Coach {
    #[must_use]
    pub fn new(
        id: Uuid,
        user_id: Uuid,
        experience_years: i32,
        description: String,
        profile_image_url: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            experience_years,
            description,
            profile_image_url,
            created_at: now,
            updated_at: now,
        }
    }
}
