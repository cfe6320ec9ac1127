//! Error view and unmatched routes

use axum::{extract::Query, http::StatusCode, Json};
use movie_service::dto::ErrorPageResponse;
use serde::Deserialize;

use crate::response::ApiError;

const DEFAULT_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Default, Deserialize)]
pub struct ErrorQuery {
    pub message: Option<String>,
}

/// Generic error view
///
/// GET /error
pub async fn error_page(Query(query): Query<ErrorQuery>) -> (StatusCode, Json<ErrorPageResponse>) {
    let message = query
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());

    (StatusCode::OK, Json(ErrorPageResponse { message }))
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
