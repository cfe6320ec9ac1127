//! Session handlers
//!
//! Sign-in form, sign-in and sign-out.

use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use movie_service::dto::{FormResponse, SessionResponse, SignInRequest};
use movie_service::AuthService;
use serde::Deserialize;

use crate::extractors::{CurrentUser, JsonBody, SESSION_COOKIE};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Query of the sign-in form
#[derive(Debug, Default, Deserialize)]
pub struct SignInFormQuery {
    pub message: Option<String>,
}

/// Describe the sign-in form
///
/// GET /sign-in
pub async fn sign_in_form(Query(query): Query<SignInFormQuery>) -> Json<FormResponse> {
    Json(FormResponse::sign_in(query.message.filter(|m| !m.is_empty())))
}

/// Sign in and set the session cookie
///
/// POST /sign-in
pub async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(request): JsonBody<SignInRequest>,
) -> ApiResult<(CookieJar, Json<SessionResponse>)> {
    let service = AuthService::new(state.service_context());
    let response = service.sign_in(&request).await?;

    let cookie = Cookie::build((SESSION_COOKIE, response.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    Ok((jar.add(cookie), Json(response)))
}

/// Sign out and drop the session cookie
///
/// POST /sign-out
pub async fn sign_out(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    jar: CookieJar,
) -> (CookieJar, NoContent) {
    AuthService::new(state.service_context()).sign_out(&principal);
    (jar.add(expired_session_cookie()), NoContent)
}

/// Blank `session` cookie that the client drops on receipt. Sent even when
/// the session came from a Bearer header.
fn expired_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    cookie.make_removal();
    cookie
}
