//! Route definitions
//!
//! All API routes mounted under /api/v1. Each route is guarded by the
//! [`Command`] the session gate checks it against.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use movie_service::Command;

use crate::handlers::{auth, bans, error, films, health, scores, users};
use crate::middleware::guard;
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .nest("/api/v1", api_v1_routes(state))
        .fallback(error::not_found)
}

/// Health check routes (exported separately to bypass the gate and rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(session_routes(state))
        .merge(user_routes(state))
        .merge(film_routes(state))
        .merge(score_routes(state))
        .merge(ban_routes(state))
        .route("/error", guard(state, Command::Error, get(error::error_page)))
}

/// Sign-in and sign-out
fn session_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/sign-in",
            guard(state, Command::SignInForm, get(auth::sign_in_form))
                .merge(guard(state, Command::SignIn, post(auth::sign_in))),
        )
        .route("/sign-out", guard(state, Command::SignOut, post(auth::sign_out)))
}

/// User routes
fn user_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            guard(state, Command::Users, get(users::list_users))
                .merge(guard(state, Command::CreateUser, post(users::create_user))),
        )
        .route(
            "/users/new",
            guard(state, Command::CreateUserForm, get(users::create_user_form)),
        )
        .route(
            "/users/:id",
            guard(state, Command::User, get(users::get_user))
                .merge(guard(state, Command::EditUser, patch(users::update_user)))
                .merge(guard(state, Command::DeleteUser, delete(users::delete_user))),
        )
        .route(
            "/users/:id/role",
            guard(state, Command::ChangeRole, put(users::change_role)),
        )
        .route(
            "/users/:id/scores",
            guard(state, Command::UserScores, get(users::user_scores)),
        )
        .route(
            "/users/:id/bans",
            guard(state, Command::UserBans, get(users::user_bans)),
        )
        .route(
            "/users/:id/issued-bans",
            guard(state, Command::AdminBans, get(users::admin_bans)),
        )
}

/// Film routes
fn film_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/films",
            guard(state, Command::Films, get(films::list_films))
                .merge(guard(state, Command::CreateFilm, post(films::create_film))),
        )
        .route(
            "/films/:id",
            guard(state, Command::Film, get(films::get_film))
                .merge(guard(state, Command::EditFilm, patch(films::update_film)))
                .merge(guard(state, Command::DeleteFilm, delete(films::delete_film))),
        )
        .route(
            "/films/:id/scores",
            guard(state, Command::FilmScores, get(films::film_scores))
                .merge(guard(state, Command::RateFilm, post(films::rate_film))),
        )
}

/// Score routes
fn score_routes(state: &AppState) -> Router<AppState> {
    Router::new().route(
        "/scores/:id",
        guard(state, Command::DeleteScore, delete(scores::delete_score)),
    )
}

/// Ban routes
fn ban_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/bans",
            guard(state, Command::Bans, get(bans::list_bans))
                .merge(guard(state, Command::CreateBan, post(bans::create_ban))),
        )
        .route(
            "/bans/:id",
            guard(state, Command::Ban, get(bans::get_ban))
                .merge(guard(state, Command::EditBan, patch(bans::update_ban)))
                .merge(guard(state, Command::DeleteBan, delete(bans::delete_ban))),
        )
}
