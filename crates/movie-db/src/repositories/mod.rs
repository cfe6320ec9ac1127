//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in movie-core.
//! Deletes are soft: rows get `deleted = TRUE` and every query filters them out.

mod ban;
mod error;
mod film;
mod score;
mod user;

pub use ban::PgBanRepository;
pub use film::PgFilmRepository;
pub use score::PgScoreRepository;
pub use user::PgUserRepository;
