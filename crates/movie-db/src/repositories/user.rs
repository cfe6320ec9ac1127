//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use movie_core::entities::{NewUser, Role, User};
use movie_core::error::DomainError;
use movie_core::traits::{RepoResult, UserRepository};
use movie_core::value_objects::Id;

use crate::mappers::role_id;
use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_conflict};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.id, u.email, u.login, u.password, u.registration, u.info,
                   u.reputation, u.avatar, r.name AS role, u.last_update
            FROM users u
            JOIN roles r ON r.id = u.role_id
            WHERE u.id = $1 AND u.deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_login(&self, login: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.id, u.email, u.login, u.password, u.registration, u.info,
                   u.reputation, u.avatar, r.name AS role, u.last_update
            FROM users u
            JOIN roles r ON r.id = u.role_id
            WHERE u.login = $1 AND u.deleted = FALSE
            ",
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.id, u.email, u.login, u.password, u.registration, u.info,
                   u.reputation, u.avatar, r.name AS role, u.last_update
            FROM users u
            JOIN roles r ON r.id = u.role_id
            WHERE u.email = $1 AND u.deleted = FALSE
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_all(&self, limit: i64, offset: i64) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.id, u.email, u.login, u.password, u.registration, u.info,
                   u.reputation, u.avatar, r.name AS role, u.last_update
            FROM users u
            JOIN roles r ON r.id = u.role_id
            WHERE u.deleted = FALSE
            ORDER BY u.id
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(User::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM users WHERE deleted = FALSE
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, user), fields(login = %user.login))]
    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            WITH inserted AS (
                INSERT INTO users (email, login, password, role_id, info, avatar)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
            )
            SELECT i.id, i.email, i.login, i.password, i.registration, i.info,
                   i.reputation, i.avatar, r.name AS role, i.last_update
            FROM inserted i
            JOIN roles r ON r.id = i.role_id
            ",
        )
        .bind(&user.email)
        .bind(&user.login)
        .bind(&user.password_hash)
        .bind(role_id(user.role))
        .bind(&user.info)
        .bind(&user.avatar)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, user_conflict))?;

        User::try_from(model)
    }

    #[instrument(skip(self, user), fields(id = %user.id))]
    async fn update(&self, user: &User) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET email = $2, login = $3, password = $4, role_id = $5, info = $6,
                reputation = $7, avatar = $8, last_update = NOW()
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.email)
        .bind(&user.login)
        .bind(&user.password_hash)
        .bind(role_id(user.role))
        .bind(&user.info)
        .bind(user.reputation)
        .bind(&user.avatar)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, user_conflict))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(user.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_role(&self, id: Id, role: Role) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET role_id = $2, last_update = NOW()
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .bind(role_id(role))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET deleted = TRUE, last_update = NOW()
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id));
        }

        Ok(())
    }
}
