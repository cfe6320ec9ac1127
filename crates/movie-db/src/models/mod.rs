//! Database models - SQLx-compatible structs for PostgreSQL tables

mod ban;
mod film;
mod score;
mod user;

pub use ban::BanModel;
pub use film::FilmModel;
pub use score::ScoreModel;
pub use user::UserModel;
