//! Coach database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for coaches table
#[derive(Debug, Clone, FromRow)]
pub struct CoachModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub experience_years: i32,
    pub description: String,
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Paged catalogue row: coach id joined with the user's display name
#[derive(Debug, Clone, FromRow)]
pub struct CoachListItemModel {
    pub id: Uuid,
    pub name: String,
}
