//! Pagination extractor
//!
//! Extracts `page`/`limit` query parameters into a [`PageRequest`].

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Query},
    http::request::Parts,
};
use movie_common::PaginationConfig;
use movie_core::{DomainError, PageRequest};
use serde::Deserialize;

use crate::response::ApiError;
use crate::state::AppState;

/// Raw pagination query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    /// 1-based page number
    #[serde(default)]
    pub page: Option<i64>,
    /// Rows per page
    #[serde(default)]
    pub limit: Option<i64>,
}

impl PaginationParams {
    /// Apply configured defaults. The limit is clamped into
    /// `1..=max_limit`; a page below 1 is rejected.
    pub fn resolve(&self, config: &PaginationConfig) -> Result<PageRequest, ApiError> {
        let page = self.page.unwrap_or(1);
        let limit = self
            .limit
            .unwrap_or(config.default_limit)
            .clamp(1, config.max_limit.max(1));

        PageRequest::new(page, limit).map_err(|e| ApiError::Domain(DomainError::InvalidPage(e)))
    }
}

/// Validated page request
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageRequest);

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        let app_state = AppState::from_ref(state);
        params
            .resolve(&app_state.config().pagination)
            .map(Pagination)
    }
}
