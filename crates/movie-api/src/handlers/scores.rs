//! Score handlers

use axum::extract::State;
use movie_service::ScoreService;

use crate::extractors::{CurrentUser, IdPath};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Withdraw a score
///
/// DELETE /scores/{id}
pub async fn delete_score(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    let service = ScoreService::new(state.service_context());
    service.delete(&principal, id).await?;
    Ok(NoContent)
}
