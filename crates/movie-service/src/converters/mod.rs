//! Entity/DTO converters
//!
//! Converters are pure apart from the lookups they are handed: the ban
//! converter resolves both parties, the film converter its average score.

mod ban;
mod film;
mod media;
mod score;
mod user;

pub use ban::BanConverter;
pub use film::FilmConverter;
pub use media::{file_name, resolve};
pub use user::UserConverter;
