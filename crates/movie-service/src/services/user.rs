//! User service

use tracing::{info, instrument};

use movie_common::hash_password;
use movie_core::{DomainError, Id, NewUser, Page, PageRequest, Role, User};

use crate::converters::UserConverter;
use crate::dto::{RegisterRequest, UpdateUserRequest, UserDto};
use crate::gate::Principal;
use crate::validation::RegistrationValidator;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::require_admin;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn converter(&self) -> UserConverter<'a> {
        UserConverter::new(self.ctx.media())
    }

    async fn find(&self, id: Id) -> ServiceResult<User> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound(id))?)
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: Id) -> ServiceResult<UserDto> {
        let user = self.find(id).await?;
        Ok(self.converter().to_dto(&user))
    }

    /// Get user by exact login
    #[instrument(skip(self))]
    pub async fn get_by_login(&self, login: &str) -> ServiceResult<Option<UserDto>> {
        let user = self.ctx.user_repo().find_by_login(login).await?;
        Ok(user.map(|u| self.converter().to_dto(&u)))
    }

    /// Get user by exact email
    #[instrument(skip(self))]
    pub async fn get_by_email(&self, email: &str) -> ServiceResult<Option<UserDto>> {
        let user = self.ctx.user_repo().find_by_email(email).await?;
        Ok(user.map(|u| self.converter().to_dto(&u)))
    }

    /// One page of users ordered by id
    #[instrument(skip(self))]
    pub async fn list(&self, request: PageRequest) -> ServiceResult<Page<UserDto>> {
        let window = request.resolve(self.count().await?);
        let users = self
            .ctx
            .user_repo()
            .find_all(window.limit, window.offset)
            .await?;

        let converter = self.converter();
        Ok(Page::new(users, window).map(|u| converter.to_dto(&u)))
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> ServiceResult<i64> {
        Ok(self.ctx.user_repo().count().await?)
    }

    /// Create an account with the USER role
    #[instrument(skip(self, request), fields(login = ?request.login))]
    pub async fn register(&self, request: &RegisterRequest) -> ServiceResult<UserDto> {
        RegistrationValidator
            .validate(
                self.ctx.user_repo(),
                &request.candidate(),
                request.password_confirmation.as_deref(),
            )
            .await?;

        let candidate = request.candidate();
        let (Some(email), Some(login), Some(password)) =
            (candidate.email, candidate.login, candidate.password)
        else {
            return Err(DomainError::ValidationError("incomplete registration".into()).into());
        };

        let user = self
            .ctx
            .user_repo()
            .create(&NewUser {
                email: email.to_string(),
                login: login.to_string(),
                password_hash: hash_password(password)?,
                role: Role::User,
                info: None,
                avatar: None,
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        Ok(self.converter().to_dto(&user))
    }

    /// Change info and avatar. Allowed for the account itself and for admins.
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        principal: &Principal,
        id: Id,
        request: &UpdateUserRequest,
    ) -> ServiceResult<UserDto> {
        let mut user = self.find(id).await?;
        if !user.can_be_managed_by(principal.user_id, principal.role) {
            return Err(DomainError::NotOwner.into());
        }

        if let Some(info) = &request.info {
            user.info = Some(info.clone()).filter(|i| !i.is_empty());
        }
        if request.avatar.is_some() {
            user.avatar = self.converter().avatar_file(request.avatar.as_deref());
        }

        self.ctx.user_repo().update(&user).await?;
        info!(user_id = %id, "Profile updated");

        let user = self.find(id).await?;
        Ok(self.converter().to_dto(&user))
    }

    /// Change a user's role (admin only)
    #[instrument(skip(self))]
    pub async fn change_role(
        &self,
        principal: &Principal,
        id: Id,
        role: Role,
    ) -> ServiceResult<UserDto> {
        require_admin(principal)?;
        let mut user = self.find(id).await?;

        self.ctx.user_repo().update_role(id, role).await?;
        info!(user_id = %id, %role, "Role changed");

        user.role = role;
        Ok(self.converter().to_dto(&user))
    }

    /// Soft delete an account. Allowed for the account itself and for admins.
    #[instrument(skip(self))]
    pub async fn delete(&self, principal: &Principal, id: Id) -> ServiceResult<()> {
        let user = self.find(id).await?;
        if !user.can_be_managed_by(principal.user_id, principal.role) {
            return Err(DomainError::NotOwner.into());
        }

        self.ctx.user_repo().delete(id).await?;
        info!(user_id = %id, "User deleted");
        Ok(())
    }
}
