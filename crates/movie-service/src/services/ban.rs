//! Ban service
//!
//! Creation and update run the rule validators first; every mutation is
//! admin-only.

use chrono::Utc;
use tracing::{info, instrument};

use movie_core::{Ban, DomainError, Id, Page, PageRequest, PageWindow};

use crate::converters::BanConverter;
use crate::dto::{BanDto, CreateBanRequest, UpdateBanRequest};
use crate::gate::Principal;
use crate::validation::{BanDraft, BanValidator};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::require_admin;

/// Ban service
pub struct BanService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BanService<'a> {
    /// Create a new BanService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn converter(&self) -> BanConverter<'a> {
        BanConverter::new(self.ctx.user_repo(), self.ctx.media())
    }

    async fn find(&self, id: Id) -> ServiceResult<Ban> {
        Ok(self
            .ctx
            .ban_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::BanNotFound(id))?)
    }

    async fn page(&self, bans: Vec<Ban>, window: PageWindow) -> ServiceResult<Page<BanDto>> {
        let items = self.converter().to_dtos(&bans, Utc::now()).await?;
        Ok(Page::new(items, window))
    }

    /// Whether the user is under an active ban
    #[instrument(skip(self))]
    pub async fn is_banned(&self, user_id: Id) -> ServiceResult<bool> {
        Ok(self.ctx.ban_repo().is_banned(user_id, Utc::now()).await?)
    }

    /// Ban a user. The principal becomes the issuing admin.
    #[instrument(skip(self, request), fields(user_id = ?request.user_id))]
    pub async fn create(
        &self,
        principal: &Principal,
        request: CreateBanRequest,
    ) -> ServiceResult<BanDto> {
        require_admin(principal)?;

        let draft = request.into_draft(principal.user_id);
        BanValidator
            .validate_create(self.ctx.user_repo(), &draft)
            .await?;
        let new_ban = draft
            .complete()
            .ok_or_else(|| ServiceError::internal("validated ban is incomplete"))?;

        let ban = self.ctx.ban_repo().create(&new_ban).await?;
        info!(ban_id = %ban.id, user_id = %ban.user_id, "User banned");

        Ok(self.converter().to_dto(&ban, Utc::now()).await?)
    }

    /// Move a ban's end date. A missing start date defaults to the stored one.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        principal: &Principal,
        id: Id,
        request: UpdateBanRequest,
    ) -> ServiceResult<BanDto> {
        require_admin(principal)?;
        let ban = self.find(id).await?;

        let draft = BanDraft {
            start_date: request.start_date.or(Some(ban.start_date)),
            end_date: request.end_date,
            ..BanDraft::default()
        };
        BanValidator.validate_update(&draft, ban.start_date)?;
        let end_date = draft
            .end_date
            .ok_or_else(|| ServiceError::internal("validated ban has no end date"))?;

        self.ctx.ban_repo().update_end_date(id, end_date).await?;
        info!(ban_id = %id, %end_date, "Ban updated");

        let ban = self.find(id).await?;
        Ok(self.converter().to_dto(&ban, Utc::now()).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: Id) -> ServiceResult<BanDto> {
        let ban = self.find(id).await?;
        Ok(self.converter().to_dto(&ban, Utc::now()).await?)
    }

    /// Soft delete a ban, lifting it (admin only)
    #[instrument(skip(self))]
    pub async fn delete(&self, principal: &Principal, id: Id) -> ServiceResult<()> {
        require_admin(principal)?;
        self.find(id).await?;

        self.ctx.ban_repo().delete(id).await?;
        info!(ban_id = %id, "Ban deleted");
        Ok(())
    }

    /// One page of all bans
    #[instrument(skip(self))]
    pub async fn list(&self, request: PageRequest) -> ServiceResult<Page<BanDto>> {
        let repo = self.ctx.ban_repo();
        let window = request.resolve(repo.count().await?);
        let bans = repo.find_all(window.limit, window.offset).await?;
        self.page(bans, window).await
    }

    /// One page of the bans placed on a user
    #[instrument(skip(self))]
    pub async fn list_by_user(
        &self,
        user_id: Id,
        request: PageRequest,
    ) -> ServiceResult<Page<BanDto>> {
        let repo = self.ctx.ban_repo();
        let window = request.resolve(repo.count_by_user(user_id).await?);
        let bans = repo
            .find_by_user(user_id, window.limit, window.offset)
            .await?;
        self.page(bans, window).await
    }

    /// One page of the bans an admin issued
    #[instrument(skip(self))]
    pub async fn list_by_admin(
        &self,
        admin_id: Id,
        request: PageRequest,
    ) -> ServiceResult<Page<BanDto>> {
        let repo = self.ctx.ban_repo();
        let window = request.resolve(repo.count_by_admin(admin_id).await?);
        let bans = repo
            .find_by_admin(admin_id, window.limit, window.offset)
            .await?;
        self.page(bans, window).await
    }
}
