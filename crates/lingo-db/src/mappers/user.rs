//! User entity <-> model mapper

use lingo_core::entities::User;

use crate::models::UserModel;

/// Convert UserModel to User entity. The password hash stays behind the
/// repository and never reaches the entity.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            created_at: model.created_at,
        }
    }
}
