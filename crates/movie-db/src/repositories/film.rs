//! PostgreSQL implementation of FilmRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use movie_core::entities::{Film, NewFilm};
use movie_core::error::DomainError;
use movie_core::traits::{FilmRepository, RepoResult};
use movie_core::value_objects::Id;

use crate::models::FilmModel;

use super::error::map_db_error;

/// PostgreSQL implementation of FilmRepository
#[derive(Clone)]
pub struct PgFilmRepository {
    pool: PgPool,
}

impl PgFilmRepository {
    /// Create a new PgFilmRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FilmRepository for PgFilmRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Film>> {
        let result = sqlx::query_as::<_, FilmModel>(
            r"
            SELECT id, title, description, release_year, length, age_rating, poster
            FROM films
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Film::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_all(&self, limit: i64, offset: i64) -> RepoResult<Vec<Film>> {
        let results = sqlx::query_as::<_, FilmModel>(
            r"
            SELECT id, title, description, release_year, length, age_rating, poster
            FROM films
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

        results.into_iter().map(Film::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM films WHERE deleted = FALSE
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, film), fields(title = %film.title))]
    async fn create(&self, film: &NewFilm) -> RepoResult<Film> {
        let model = sqlx::query_as::<_, FilmModel>(
            r"
            INSERT INTO films (title, description, release_year, length, age_rating, poster)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, release_year, length, age_rating, poster
            ",
        )
        .bind(&film.title)
        .bind(&film.description)
        .bind(film.release_year)
        .bind(film.length)
        .bind(film.age_rating.as_str())
        .bind(&film.poster)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Film::try_from(model)
    }

    #[instrument(skip(self, film))]
    async fn update(&self, id: Id, film: &NewFilm) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE films
            SET title = $2, description = $3, release_year = $4, length = $5,
                age_rating = $6, poster = $7, last_update = NOW()
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .bind(&film.title)
        .bind(&film.description)
        .bind(film.release_year)
        .bind(film.length)
        .bind(film.age_rating.as_str())
        .bind(&film.poster)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::FilmNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE films
            SET deleted = TRUE, last_update = NOW()
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::FilmNotFound(id));
        }

        Ok(())
    }
}
