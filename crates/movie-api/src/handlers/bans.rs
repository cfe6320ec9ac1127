//! Ban handlers
//!
//! Every write is admin-only; the service checks the principal's role.

use axum::{extract::State, Json};
use movie_service::dto::{BanDto, CreateBanRequest, PaginatedResponse, UpdateBanRequest};
use movie_service::BanService;

use crate::extractors::{CurrentUser, IdPath, JsonBody, Pagination};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List bans
///
/// GET /bans
pub async fn list_bans(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<BanDto>>> {
    let service = BanService::new(state.service_context());
    let bans = service.list(page).await?;
    Ok(Json(bans.into()))
}

/// Ban a user. The issuing admin is the signed-in principal.
///
/// POST /bans
pub async fn create_ban(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    JsonBody(request): JsonBody<CreateBanRequest>,
) -> ApiResult<Created<Json<BanDto>>> {
    let service = BanService::new(state.service_context());
    let ban = service.create(&principal, request).await?;
    Ok(Created(Json(ban)))
}

/// Get a ban
///
/// GET /bans/{id}
pub async fn get_ban(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<BanDto>> {
    let service = BanService::new(state.service_context());
    Ok(Json(service.get_by_id(id).await?))
}

/// Move a ban's end date
///
/// PATCH /bans/{id}
pub async fn update_ban(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<UpdateBanRequest>,
) -> ApiResult<Json<BanDto>> {
    let service = BanService::new(state.service_context());
    let ban = service.update(&principal, id, request).await?;
    Ok(Json(ban))
}

/// Lift a ban
///
/// DELETE /bans/{id}
pub async fn delete_ban(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    let service = BanService::new(state.service_context());
    service.delete(&principal, id).await?;
    Ok(NoContent)
}
