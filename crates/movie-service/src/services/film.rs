//! Film service

use tracing::{info, instrument};

use movie_core::{DomainError, Film, Id, Page, PageRequest};

use crate::converters::FilmConverter;
use crate::dto::{FilmDto, FilmRequest};
use crate::gate::Principal;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::require_admin;

/// Film service
pub struct FilmService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FilmService<'a> {
    /// Create a new FilmService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn converter(&self) -> FilmConverter<'a> {
        FilmConverter::new(self.ctx.score_repo(), self.ctx.media())
    }

    async fn find(&self, id: Id) -> ServiceResult<Film> {
        Ok(self
            .ctx
            .film_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::FilmNotFound(id))?)
    }

    /// Get film by ID with its average score
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: Id) -> ServiceResult<FilmDto> {
        let film = self.find(id).await?;
        Ok(self.converter().to_dto(&film).await?)
    }

    /// One page of films ordered by id
    #[instrument(skip(self))]
    pub async fn list(&self, request: PageRequest) -> ServiceResult<Page<FilmDto>> {
        let window = request.resolve(self.count().await?);
        let films = self
            .ctx
            .film_repo()
            .find_all(window.limit, window.offset)
            .await?;

        let items = self.converter().to_dtos(&films).await?;
        Ok(Page::new(items, window))
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> ServiceResult<i64> {
        Ok(self.ctx.film_repo().count().await?)
    }

    /// Add a film (admin only)
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(
        &self,
        principal: &Principal,
        request: &FilmRequest,
    ) -> ServiceResult<FilmDto> {
        require_admin(principal)?;

        let converter = self.converter();
        let film = self
            .ctx
            .film_repo()
            .create(&converter.to_entity(request))
            .await?;

        info!(film_id = %film.id, "Film created");
        Ok(converter.to_dto(&film).await?)
    }

    /// Replace a film's details (admin only)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        principal: &Principal,
        id: Id,
        request: &FilmRequest,
    ) -> ServiceResult<FilmDto> {
        require_admin(principal)?;
        self.find(id).await?;

        let converter = self.converter();
        self.ctx
            .film_repo()
            .update(id, &converter.to_entity(request))
            .await?;
        info!(film_id = %id, "Film updated");

        let film = self.find(id).await?;
        Ok(converter.to_dto(&film).await?)
    }

    /// Soft delete a film (admin only)
    #[instrument(skip(self))]
    pub async fn delete(&self, principal: &Principal, id: Id) -> ServiceResult<()> {
        require_admin(principal)?;
        self.find(id).await?;

        self.ctx.film_repo().delete(id).await?;
        info!(film_id = %id, "Film deleted");
        Ok(())
    }
}
