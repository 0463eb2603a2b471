//! User entity <-> model mapper

use booking_core::entities::User;
use booking_core::value_objects::UserRole;

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// An unrecognized role string demotes to USER rather than failing the row;
/// the column only ever holds the two known values.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            role: model.role.parse().unwrap_or(UserRole::User),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
