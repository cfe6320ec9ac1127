//! # movie-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AgeRating, Ban, Film, NewBan, NewFilm, NewUser, Role, Score, UnknownAgeRating, UnknownRole,
    User,
};
pub use error::DomainError;
pub use traits::{BanRepository, FilmRepository, RepoResult, ScoreRepository, UserRepository};
pub use value_objects::{
    Field, Id, IdParseError, Page, PageRequest, PageRequestError, PageWindow, Rule, Violation,
    Violations,
};
