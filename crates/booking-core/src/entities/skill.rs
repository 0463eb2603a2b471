//! Skill entity - a coach specialty tag

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Named skill attached to coaches and courses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Skill {
    #[must_use]
    pub fn new(id: Uuid, name: String) -> Self {
        Self {
            id,
            name,
            created_at: Utc::now(),
        }
    }
}
