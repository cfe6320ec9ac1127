//! Film database model

use sqlx::FromRow;

/// Database model for films table
#[derive(Debug, Clone, FromRow)]
pub struct FilmModel {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub release_year: i32,
    pub length: i32,
    pub age_rating: String,
    pub poster: Option<String>,
}
