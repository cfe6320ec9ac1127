//! PostgreSQL implementation of BanRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use movie_core::entities::{Ban, NewBan};
use movie_core::error::DomainError;
use movie_core::traits::{BanRepository, RepoResult};
use movie_core::value_objects::Id;

use crate::models::BanModel;

use super::error::map_db_error;

/// PostgreSQL implementation of BanRepository
#[derive(Clone)]
pub struct PgBanRepository {
    pool: PgPool,
}

impl PgBanRepository {
    /// Create a new PgBanRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BanRepository for PgBanRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Ban>> {
        let result = sqlx::query_as::<_, BanModel>(
            r"
            SELECT id, user_id, admin_id, start_date, end_date, reason, last_update
            FROM bans
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Ban::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, limit: i64, offset: i64) -> RepoResult<Vec<Ban>> {
        let results = sqlx::query_as::<_, BanModel>(
            r"
            SELECT id, user_id, admin_id, start_date, end_date, reason, last_update
            FROM bans
            WHERE deleted = FALSE
            ORDER BY id
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Ban::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Id, limit: i64, offset: i64) -> RepoResult<Vec<Ban>> {
        let results = sqlx::query_as::<_, BanModel>(
            r"
            SELECT id, user_id, admin_id, start_date, end_date, reason, last_update
            FROM bans
            WHERE user_id = $1 AND deleted = FALSE
            ORDER BY id
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(user_id.into_inner())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Ban::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_admin(
        &self,
        admin_id: Id,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<Ban>> {
        let results = sqlx::query_as::<_, BanModel>(
            r"
            SELECT id, user_id, admin_id, start_date, end_date, reason, last_update
            FROM bans
            WHERE admin_id = $1 AND deleted = FALSE
            ORDER BY id
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(admin_id.into_inner())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Ban::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM bans WHERE deleted = FALSE
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_by_user(&self, user_id: Id) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM bans WHERE user_id = $1 AND deleted = FALSE
            ",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_by_admin(&self, admin_id: Id) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM bans WHERE admin_id = $1 AND deleted = FALSE
            ",
        )
        .bind(admin_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn is_banned(&self, user_id: Id, now: DateTime<Utc>) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM bans
                WHERE user_id = $1 AND deleted = FALSE AND end_date > $2
            )
            ",
        )
        .bind(user_id.into_inner())
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, ban), fields(user_id = %ban.user_id, admin_id = %ban.admin_id))]
    async fn create(&self, ban: &NewBan) -> RepoResult<Ban> {
        let model = sqlx::query_as::<_, BanModel>(
            r"
            INSERT INTO bans (user_id, admin_id, start_date, end_date, reason)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, admin_id, start_date, end_date, reason, last_update
            ",
        )
        .bind(ban.user_id.into_inner())
        .bind(ban.admin_id.into_inner())
        .bind(ban.start_date)
        .bind(ban.end_date)
        .bind(&ban.reason)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Ban::from(model))
    }

    #[instrument(skip(self))]
    async fn update_end_date(&self, id: Id, end_date: DateTime<Utc>) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE bans
            SET end_date = $2, last_update = NOW()
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .bind(end_date)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::BanNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE bans
            SET deleted = TRUE, last_update = NOW()
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::BanNotFound(id));
        }

        Ok(())
    }
}
