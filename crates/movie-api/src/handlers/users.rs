//! User handlers
//!
//! Registration, profiles, roles and the per-user score and ban listings.

use axum::{extract::State, Json};
use movie_service::dto::{
    BanDto, ChangeRoleRequest, FormResponse, PaginatedResponse, RegisterRequest, ScoreDto,
    UpdateUserRequest, UserDto,
};
use movie_service::{BanService, ScoreService, UserService};

use crate::extractors::{CurrentUser, IdPath, JsonBody, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Describe the registration form
///
/// GET /users/new
pub async fn create_user_form() -> Json<FormResponse> {
    Json(FormResponse::create_user())
}

/// Register a new user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> ApiResult<Created<Json<UserDto>>> {
    let service = UserService::new(state.service_context());
    let user = service.register(&request).await?;
    Ok(Created(Json(user)))
}

/// List users
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<UserDto>>> {
    let service = UserService::new(state.service_context());
    let users = service.list(page).await?;
    Ok(Json(users.into()))
}

/// Get a user
///
/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<UserDto>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.get_by_id(id).await?))
}

/// Update a profile
///
/// PATCH /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserDto>> {
    let service = UserService::new(state.service_context());
    let user = service.update_profile(&principal, id, &request).await?;
    Ok(Json(user))
}

/// Delete a user
///
/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.delete(&principal, id).await?;
    Ok(NoContent)
}

/// Change a user's role
///
/// PUT /users/{id}/role
pub async fn change_role(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<ChangeRoleRequest>,
) -> ApiResult<Json<UserDto>> {
    let service = UserService::new(state.service_context());
    let user = service.change_role(&principal, id, request.role).await?;
    Ok(Json(user))
}

/// Scores given by a user
///
/// GET /users/{id}/scores
pub async fn user_scores(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<ScoreDto>>> {
    let service = ScoreService::new(state.service_context());
    let scores = service.list_by_user(id, page).await?;
    Ok(Json(scores.into()))
}

/// Bans placed on a user
///
/// GET /users/{id}/bans
pub async fn user_bans(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<BanDto>>> {
    let service = BanService::new(state.service_context());
    let bans = service.list_by_user(id, page).await?;
    Ok(Json(bans.into()))
}

/// Bans issued by an admin
///
/// GET /users/{id}/issued-bans
pub async fn admin_bans(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<BanDto>>> {
    let service = BanService::new(state.service_context());
    let bans = service.list_by_admin(id, page).await?;
    Ok(Json(bans.into()))
}
