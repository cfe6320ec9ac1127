//! Service context - dependency container for services
//!
//! Built once at start-up and shared behind an `Arc` by every request.

use std::sync::Arc;

use movie_common::{MediaConfig, PaginationConfig, SessionService};
use movie_core::traits::{BanRepository, FilmRepository, ScoreRepository, UserRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Holds one shared instance per repository interface, the session service
/// used to issue and verify tokens, and the media/pagination settings the
/// converters and listings need.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    ban_repo: Arc<dyn BanRepository>,
    film_repo: Arc<dyn FilmRepository>,
    score_repo: Arc<dyn ScoreRepository>,

    // Services
    session_service: Arc<SessionService>,

    // Settings
    media: MediaConfig,
    pagination: PaginationConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        ban_repo: Arc<dyn BanRepository>,
        film_repo: Arc<dyn FilmRepository>,
        score_repo: Arc<dyn ScoreRepository>,
        session_service: Arc<SessionService>,
        media: MediaConfig,
        pagination: PaginationConfig,
    ) -> Self {
        Self {
            user_repo,
            ban_repo,
            film_repo,
            score_repo,
            session_service,
            media,
            pagination,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the ban repository
    pub fn ban_repo(&self) -> &dyn BanRepository {
        self.ban_repo.as_ref()
    }

    /// Get the film repository
    pub fn film_repo(&self) -> &dyn FilmRepository {
        self.film_repo.as_ref()
    }

    /// Get the score repository
    pub fn score_repo(&self) -> &dyn ScoreRepository {
        self.score_repo.as_ref()
    }

    // === Services ===

    /// Get the session token service
    pub fn session_service(&self) -> &SessionService {
        self.session_service.as_ref()
    }

    // === Settings ===

    pub fn media(&self) -> &MediaConfig {
        &self.media
    }

    pub fn pagination(&self) -> PaginationConfig {
        self.pagination
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("session_service", &self.session_service)
            .field("media", &self.media)
            .field("pagination", &self.pagination)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    ban_repo: Option<Arc<dyn BanRepository>>,
    film_repo: Option<Arc<dyn FilmRepository>>,
    score_repo: Option<Arc<dyn ScoreRepository>>,
    session_service: Option<Arc<SessionService>>,
    media: Option<MediaConfig>,
    pagination: Option<PaginationConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn ban_repo(mut self, repo: Arc<dyn BanRepository>) -> Self {
        self.ban_repo = Some(repo);
        self
    }

    pub fn film_repo(mut self, repo: Arc<dyn FilmRepository>) -> Self {
        self.film_repo = Some(repo);
        self
    }

    pub fn score_repo(mut self, repo: Arc<dyn ScoreRepository>) -> Self {
        self.score_repo = Some(repo);
        self
    }

    pub fn session_service(mut self, service: Arc<SessionService>) -> Self {
        self.session_service = Some(service);
        self
    }

    pub fn media(mut self, media: MediaConfig) -> Self {
        self.media = Some(media);
        self
    }

    pub fn pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Build the ServiceContext
    ///
    /// Media and pagination settings fall back to their defaults.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.ban_repo
                .ok_or_else(|| ServiceError::validation("ban_repo is required"))?,
            self.film_repo
                .ok_or_else(|| ServiceError::validation("film_repo is required"))?,
            self.score_repo
                .ok_or_else(|| ServiceError::validation("score_repo is required"))?,
            self.session_service
                .ok_or_else(|| ServiceError::validation("session_service is required"))?,
            self.media.unwrap_or_default(),
            self.pagination.unwrap_or_default(),
        ))
    }
}
