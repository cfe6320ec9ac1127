//! Ban conversion

use chrono::{DateTime, Utc};

use movie_common::MediaConfig;
use movie_core::traits::UserRepository;
use movie_core::{Ban, DomainError, Id};

use super::UserConverter;
use crate::dto::{BanDto, UserDto};

/// Converts bans, resolving the banned user and the issuing admin
#[derive(Clone, Copy)]
pub struct BanConverter<'a> {
    users: &'a dyn UserRepository,
    media: &'a MediaConfig,
}

impl<'a> BanConverter<'a> {
    pub fn new(users: &'a dyn UserRepository, media: &'a MediaConfig) -> Self {
        Self { users, media }
    }

    /// Convert a ban; `now` decides whether it is still active
    pub async fn to_dto(&self, ban: &Ban, now: DateTime<Utc>) -> Result<BanDto, DomainError> {
        let user = self.party(ban.user_id).await?;
        let admin = self.party(ban.admin_id).await?;

        Ok(BanDto {
            id: ban.id,
            user_id: ban.user_id,
            admin_id: ban.admin_id,
            user,
            admin,
            start_date: ban.start_date,
            end_date: ban.end_date,
            reason: ban.reason.clone(),
            active: ban.is_active_at(now),
        })
    }

    pub async fn to_dtos(
        &self,
        bans: &[Ban],
        now: DateTime<Utc>,
    ) -> Result<Vec<BanDto>, DomainError> {
        let mut dtos = Vec::with_capacity(bans.len());
        for ban in bans {
            dtos.push(self.to_dto(ban, now).await?);
        }
        Ok(dtos)
    }

    async fn party(&self, id: Id) -> Result<Option<UserDto>, DomainError> {
        let converter = UserConverter::new(self.media);
        Ok(self
            .users
            .find_by_id(id)
            .await?
            .map(|user| converter.to_dto(&user)))
    }
}
