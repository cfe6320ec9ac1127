//! PostgreSQL implementation of ScoreRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use movie_core::entities::Score;
use movie_core::error::DomainError;
use movie_core::traits::{RepoResult, ScoreRepository};
use movie_core::value_objects::Id;

use crate::models::ScoreModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ScoreRepository
#[derive(Clone)]
pub struct PgScoreRepository {
    pool: PgPool,
}

impl PgScoreRepository {
    /// Create a new PgScoreRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScoreRepository for PgScoreRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Score>> {
        let result = sqlx::query_as::<_, ScoreModel>(
            r"
            SELECT id, film_id, user_id, value, created_at, last_update
            FROM scores
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Score::from))
    }

    #[instrument(skip(self))]
    async fn find_by_film_and_user(&self, film_id: Id, user_id: Id) -> RepoResult<Option<Score>> {
        let result = sqlx::query_as::<_, ScoreModel>(
            r"
            SELECT id, film_id, user_id, value, created_at, last_update
            FROM scores
            WHERE film_id = $1 AND user_id = $2 AND deleted = FALSE
            ",
        )
        .bind(film_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Score::from))
    }

    #[instrument(skip(self))]
    async fn find_by_film(&self, film_id: Id, limit: i64, offset: i64) -> RepoResult<Vec<Score>> {
        let results = sqlx::query_as::<_, ScoreModel>(
            r"
            SELECT id, film_id, user_id, value, created_at, last_update
            FROM scores
            WHERE film_id = $1 AND deleted = FALSE
            ORDER BY id
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(film_id.into_inner())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Score::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Id, limit: i64, offset: i64) -> RepoResult<Vec<Score>> {
        let results = sqlx::query_as::<_, ScoreModel>(
            r"
            SELECT id, film_id, user_id, value, created_at, last_update
            FROM scores
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

        Ok(results.into_iter().map(Score::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_film(&self, film_id: Id) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM scores WHERE film_id = $1 AND deleted = FALSE
            ",
        )
        .bind(film_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_by_user(&self, user_id: Id) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM scores WHERE user_id = $1 AND deleted = FALSE
            ",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn average_for_film(&self, film_id: Id) -> RepoResult<Option<f64>> {
        sqlx::query_scalar::<_, Option<f64>>(
            r"
            SELECT AVG(value)::FLOAT8 FROM scores WHERE film_id = $1 AND deleted = FALSE
            ",
        )
        .bind(film_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, film_id: Id, user_id: Id, value: i32) -> RepoResult<Score> {
        let model = sqlx::query_as::<_, ScoreModel>(
            r"
            INSERT INTO scores (film_id, user_id, value)
            VALUES ($1, $2, $3)
            RETURNING id, film_id, user_id, value, created_at, last_update
            ",
        )
        .bind(film_id.into_inner())
        .bind(user_id.into_inner())
        .bind(value)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, |_| DomainError::AlreadyScored))?;

        Ok(Score::from(model))
    }

    #[instrument(skip(self))]
    async fn update_value(&self, id: Id, value: i32) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE scores
            SET value = $2, last_update = NOW()
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ScoreNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE scores
            SET deleted = TRUE, last_update = NOW()
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ScoreNotFound(id));
        }

        Ok(())
    }
}
