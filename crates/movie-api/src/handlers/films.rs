//! Film handlers

use axum::{extract::State, Json};
use movie_service::dto::{FilmDto, FilmRequest, PaginatedResponse, RateFilmRequest, ScoreDto};
use movie_service::{FilmService, ScoreService};

use crate::extractors::{CurrentUser, IdPath, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List films
///
/// GET /films
pub async fn list_films(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<FilmDto>>> {
    let service = FilmService::new(state.service_context());
    let films = service.list(page).await?;
    Ok(Json(films.into()))
}

/// Get a film
///
/// GET /films/{id}
pub async fn get_film(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<FilmDto>> {
    let service = FilmService::new(state.service_context());
    Ok(Json(service.get_by_id(id).await?))
}

/// Add a film
///
/// POST /films
pub async fn create_film(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    ValidatedJson(request): ValidatedJson<FilmRequest>,
) -> ApiResult<Created<Json<FilmDto>>> {
    let service = FilmService::new(state.service_context());
    let film = service.create(&principal, &request).await?;
    Ok(Created(Json(film)))
}

/// Replace a film's fields
///
/// PATCH /films/{id}
pub async fn update_film(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<FilmRequest>,
) -> ApiResult<Json<FilmDto>> {
    let service = FilmService::new(state.service_context());
    let film = service.update(&principal, id, &request).await?;
    Ok(Json(film))
}

/// Delete a film
///
/// DELETE /films/{id}
pub async fn delete_film(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    let service = FilmService::new(state.service_context());
    service.delete(&principal, id).await?;
    Ok(NoContent)
}

/// Scores of a film
///
/// GET /films/{id}/scores
pub async fn film_scores(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<ScoreDto>>> {
    let service = ScoreService::new(state.service_context());
    let scores = service.list_by_film(id, page).await?;
    Ok(Json(scores.into()))
}

/// Rate a film as the signed-in user
///
/// POST /films/{id}/scores
pub async fn rate_film(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<RateFilmRequest>,
) -> ApiResult<Json<ScoreDto>> {
    let service = ScoreService::new(state.service_context());
    let score = service.rate(&principal, id, request.value).await?;
    Ok(Json(score))
}
