//! Axum extractors for request handling
//!
//! Custom extractors for the gate-resolved principal, validation,
//! pagination and path ids.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::{session_token, CurrentUser, OptionalUser, SESSION_COOKIE};
pub use pagination::{Pagination, PaginationParams};
pub use path::IdPath;
pub use validated::{JsonBody, ValidatedJson};
