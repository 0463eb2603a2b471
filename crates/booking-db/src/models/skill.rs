//! Skill database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for skills table
#[derive(Debug, Clone, FromRow)]
pub struct SkillModel {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
