//! Entity to model mappers
//!
//! Conversions from database rows to domain entities. Rows carrying enum
//! columns convert with `TryFrom` so an unknown value surfaces as an error.

mod ban;
mod film;
mod score;
mod user;

pub use user::role_id;
