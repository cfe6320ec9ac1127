//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs and the infrastructure layer
//! provides the implementation. Every read excludes soft-deleted rows.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Ban, Film, NewBan, NewFilm, NewUser, Role, Score, User};
use crate::error::DomainError;
use crate::value_objects::Id;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>>;

    /// Find user by exact login
    async fn find_by_login(&self, login: &str) -> RepoResult<Option<User>>;

    /// Find user by exact email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// List users ordered by id
    async fn find_all(&self, limit: i64, offset: i64) -> RepoResult<Vec<User>>;

    /// Count users
    async fn count(&self) -> RepoResult<i64>;

    /// Insert a user and return the stored row
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Update email, login, password, role, info, reputation and avatar
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Change only the role
    async fn update_role(&self, id: Id, role: Role) -> RepoResult<()>;

    /// Soft delete a user
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// Ban Repository
// ============================================================================

#[async_trait]
pub trait BanRepository: Send + Sync {
    /// Find ban by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Ban>>;

    /// List bans ordered by id
    async fn find_all(&self, limit: i64, offset: i64) -> RepoResult<Vec<Ban>>;

    /// List bans placed on a user
    async fn find_by_user(&self, user_id: Id, limit: i64, offset: i64) -> RepoResult<Vec<Ban>>;

    /// List bans issued by an admin
    async fn find_by_admin(&self, admin_id: Id, limit: i64, offset: i64)
        -> RepoResult<Vec<Ban>>;

    async fn count(&self) -> RepoResult<i64>;

    async fn count_by_user(&self, user_id: Id) -> RepoResult<i64>;

    async fn count_by_admin(&self, admin_id: Id) -> RepoResult<i64>;

    /// Whether the user has a ban ending after `now`
    async fn is_banned(&self, user_id: Id, now: DateTime<Utc>) -> RepoResult<bool>;

    /// Insert a ban and return the stored row
    async fn create(&self, ban: &NewBan) -> RepoResult<Ban>;

    /// Change only the end date
    async fn update_end_date(&self, id: Id, end_date: DateTime<Utc>) -> RepoResult<()>;

    /// Soft delete a ban
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// Film Repository
// ============================================================================

#[async_trait]
pub trait FilmRepository: Send + Sync {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Film>>;

    /// List films ordered by id
    async fn find_all(&self, limit: i64, offset: i64) -> RepoResult<Vec<Film>>;

    async fn count(&self) -> RepoResult<i64>;

    async fn create(&self, film: &NewFilm) -> RepoResult<Film>;

    /// Replace every editable column
    async fn update(&self, id: Id, film: &NewFilm) -> RepoResult<()>;

    /// Soft delete a film
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// Score Repository
// ============================================================================

#[async_trait]
pub trait ScoreRepository: Send + Sync {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Score>>;

    /// The score a user gave a film, if any
    async fn find_by_film_and_user(&self, film_id: Id, user_id: Id)
        -> RepoResult<Option<Score>>;

    async fn find_by_film(&self, film_id: Id, limit: i64, offset: i64) -> RepoResult<Vec<Score>>;

    async fn find_by_user(&self, user_id: Id, limit: i64, offset: i64) -> RepoResult<Vec<Score>>;

    async fn count_by_film(&self, film_id: Id) -> RepoResult<i64>;

    async fn count_by_user(&self, user_id: Id) -> RepoResult<i64>;

    /// Mean of the film's scores, `None` when it has none
    async fn average_for_film(&self, film_id: Id) -> RepoResult<Option<f64>>;

    async fn create(&self, film_id: Id, user_id: Id, value: i32) -> RepoResult<Score>;

    async fn update_value(&self, id: Id, value: i32) -> RepoResult<()>;

    /// Soft delete a score
    async fn delete(&self, id: Id) -> RepoResult<()>;
}
