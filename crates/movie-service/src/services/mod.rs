//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the length of one
//! request. Operations that act for a signed-in user take the gate's
//! [`Principal`](crate::gate::Principal); admin checks happen here.

pub mod auth;
pub mod ban;
pub mod context;
pub mod error;
pub mod film;
pub mod score;
pub mod user;

pub use auth::AuthService;
pub use ban::BanService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use film::FilmService;
pub use score::ScoreService;
pub use user::UserService;

use movie_core::DomainError;

use crate::gate::Principal;

/// Fail unless the principal is an admin
pub(crate) fn require_admin(principal: &Principal) -> ServiceResult<()> {
    if principal.is_admin() {
        Ok(())
    } else {
        Err(DomainError::AdminRequired.into())
    }
}
