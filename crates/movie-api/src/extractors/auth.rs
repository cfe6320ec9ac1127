//! Session extractors
//!
//! The gate middleware resolves the session token once per request and
//! stores the resulting [`Access`] in the request extensions. These
//! extractors read it back.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts, http::HeaderMap};
use axum_extra::{
    extract::CookieJar,
    headers::{authorization::Bearer, Authorization, HeaderMapExt},
};
use movie_service::{Access, Principal};

use crate::response::ApiError;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "session";

/// Session token from the `Authorization: Bearer` header, falling back
/// to the session cookie
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(Authorization(bearer)) = headers.typed_get::<Authorization<Bearer>>() {
        return Some(bearer.token().to_string());
    }

    CookieJar::from_headers(headers)
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

/// Signed-in principal of the current request
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Access>()
            .and_then(|access| access.principal)
            .map(CurrentUser)
            .ok_or(ApiError::MissingAuth)
    }
}

/// Principal, if the request carried a valid session
#[derive(Debug, Clone, Copy)]
pub struct OptionalUser(pub Option<Principal>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalUser(
            parts
                .extensions
                .get::<Access>()
                .and_then(|access| access.principal),
        ))
    }
}
