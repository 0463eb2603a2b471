//! User entity - the anchor for all ownership relations

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::UserRole;

/// User account entity
///
/// The password hash is intentionally not part of the entity; it is fetched
/// separately where authentication needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with the default `USER` role
    #[must_use]
    pub fn new(id: Uuid, name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            role: UserRole::User,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this account holds coach capabilities
    #[inline]
    #[must_use]
    pub fn is_coach(&self) -> bool {
        self.role.is_coach()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_user_role() {
        let user = User::new(Uuid::new_v4(), "amber".to_string(), "amber@example.com".to_string());
        assert_eq!(user.role, UserRole::User);
        assert!(!user.is_coach());
    }
}
