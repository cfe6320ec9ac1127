//! User conversion

use movie_common::MediaConfig;
use movie_core::User;

use super::media;
use crate::dto::UserDto;

/// Converts users, resolving avatars against the media settings
#[derive(Debug, Clone, Copy)]
pub struct UserConverter<'a> {
    media: &'a MediaConfig,
}

impl<'a> UserConverter<'a> {
    pub fn new(media: &'a MediaConfig) -> Self {
        Self { media }
    }

    pub fn to_dto(&self, user: &User) -> UserDto {
        UserDto {
            id: user.id,
            email: user.email.clone(),
            login: user.login.clone(),
            registered_at: user.registered_at,
            info: user.info.clone(),
            reputation: user.reputation,
            avatar: media::resolve(
                &self.media.avatar_url_prefix,
                &self.media.default_avatar,
                user.avatar.as_deref(),
            ),
            role: user.role,
        }
    }

    /// Avatar file name to store for a submitted avatar path
    pub fn avatar_file(&self, path: Option<&str>) -> Option<String> {
        media::file_name(&self.media.default_avatar, path)
    }
}
