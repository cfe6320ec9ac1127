//! Sign-in service
//!
//! Sessions are stateless tokens, so signing out only needs the client to
//! drop its token.

use chrono::Utc;
use tracing::{info, instrument, warn};

use movie_common::verify_password;
use movie_core::DomainError;

use crate::converters::UserConverter;
use crate::dto::{SessionResponse, SignInRequest};
use crate::gate::Principal;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Sign in with login and password
    #[instrument(skip(self, request), fields(login = %request.login))]
    pub async fn sign_in(&self, request: &SignInRequest) -> ServiceResult<SessionResponse> {
        if request.login.is_empty() || request.password.is_empty() {
            return Err(DomainError::InvalidCredentials.into());
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_login(&request.login)
            .await?
            .ok_or_else(|| {
                warn!("Sign-in failed: unknown login");
                DomainError::InvalidCredentials
            })?;

        if !verify_password(&request.password, &user.password_hash)? {
            warn!(user_id = %user.id, "Sign-in failed: wrong password");
            return Err(DomainError::InvalidCredentials.into());
        }

        if self.ctx.ban_repo().is_banned(user.id, Utc::now()).await? {
            warn!(user_id = %user.id, "Sign-in refused: user is banned");
            return Err(DomainError::UserBanned.into());
        }

        let token = self.ctx.session_service().issue(user.id, user.role)?;

        info!(user_id = %user.id, "User signed in");

        Ok(SessionResponse {
            token: token.token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            user: UserConverter::new(self.ctx.media()).to_dto(&user),
        })
    }

    /// Sign out. Nothing is stored server-side.
    #[instrument(skip(self))]
    pub fn sign_out(&self, principal: &Principal) {
        info!(user_id = %principal.user_id, "User signed out");
    }
}
