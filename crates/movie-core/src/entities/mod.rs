//! Domain entities - core business objects

mod ban;
mod film;
mod score;
mod user;

pub use ban::{Ban, NewBan};
pub use film::{AgeRating, Film, NewFilm, UnknownAgeRating};
pub use score::Score;
pub use user::{NewUser, Role, UnknownRole, User};
