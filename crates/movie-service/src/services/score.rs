//! Score service

use tracing::{info, instrument};

use movie_core::{DomainError, Id, Page, PageRequest, Score};

use crate::dto::ScoreDto;
use crate::gate::Principal;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Score service
pub struct ScoreService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ScoreService<'a> {
    /// Create a new ScoreService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn ensure_film(&self, film_id: Id) -> ServiceResult<()> {
        match self.ctx.film_repo().find_by_id(film_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::FilmNotFound(film_id).into()),
        }
    }

    /// Rate a film. An earlier score by the same user is replaced.
    #[instrument(skip(self))]
    pub async fn rate(
        &self,
        principal: &Principal,
        film_id: Id,
        value: i32,
    ) -> ServiceResult<ScoreDto> {
        if !Score::is_valid_value(value) {
            return Err(ServiceError::validation(format!(
                "Score must be between {} and {}",
                Score::MIN_VALUE,
                Score::MAX_VALUE
            )));
        }
        self.ensure_film(film_id).await?;

        let repo = self.ctx.score_repo();
        let score = match repo.find_by_film_and_user(film_id, principal.user_id).await? {
            Some(existing) => {
                repo.update_value(existing.id, value).await?;
                Score { value, ..existing }
            }
            None => repo.create(film_id, principal.user_id, value).await?,
        };

        info!(score_id = %score.id, %film_id, value, "Film rated");
        Ok(ScoreDto::from(&score))
    }

    /// One page of a film's scores
    #[instrument(skip(self))]
    pub async fn list_by_film(
        &self,
        film_id: Id,
        request: PageRequest,
    ) -> ServiceResult<Page<ScoreDto>> {
        self.ensure_film(film_id).await?;

        let repo = self.ctx.score_repo();
        let window = request.resolve(repo.count_by_film(film_id).await?);
        let scores = repo
            .find_by_film(film_id, window.limit, window.offset)
            .await?;
        Ok(Page::new(scores, window).map(ScoreDto::from))
    }

    /// One page of a user's scores
    #[instrument(skip(self))]
    pub async fn list_by_user(
        &self,
        user_id: Id,
        request: PageRequest,
    ) -> ServiceResult<Page<ScoreDto>> {
        if self.ctx.user_repo().find_by_id(user_id).await?.is_none() {
            return Err(DomainError::UserNotFound(user_id).into());
        }

        let repo = self.ctx.score_repo();
        let window = request.resolve(repo.count_by_user(user_id).await?);
        let scores = repo
            .find_by_user(user_id, window.limit, window.offset)
            .await?;
        Ok(Page::new(scores, window).map(ScoreDto::from))
    }

    /// Soft delete a score. Allowed for its author and for admins.
    #[instrument(skip(self))]
    pub async fn delete(&self, principal: &Principal, id: Id) -> ServiceResult<()> {
        let score = self
            .ctx
            .score_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ScoreNotFound(id))?;
        if score.user_id != principal.user_id && !principal.is_admin() {
            return Err(DomainError::NotOwner.into());
        }

        self.ctx.score_repo().delete(id).await?;
        info!(score_id = %id, "Score deleted");
        Ok(())
    }
}
