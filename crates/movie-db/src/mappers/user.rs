//! User entity <-> model mapper

use movie_core::entities::{Role, User};
use movie_core::error::DomainError;
use movie_core::value_objects::Id;

use crate::models::UserModel;

/// Role id in the `roles` lookup table
pub fn role_id(role: Role) -> i16 {
    match role {
        Role::User => 1,
        Role::Admin => 2,
    }
}

/// Convert UserModel to User entity; fails on a role name the domain does not know
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = model
            .role
            .parse::<Role>()
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(User {
            id: Id::new(model.id),
            email: model.email,
            login: model.login,
            password_hash: model.password,
            registered_at: model.registration,
            info: model.info,
            reputation: model.reputation,
            avatar: model.avatar,
            role,
            last_update: model.last_update,
        })
    }
}
