//! Film entity <-> model mapper

use movie_core::entities::{AgeRating, Film};
use movie_core::error::DomainError;
use movie_core::value_objects::Id;

use crate::models::FilmModel;

impl TryFrom<FilmModel> for Film {
    type Error = DomainError;

    fn try_from(model: FilmModel) -> Result<Self, Self::Error> {
        let age_rating = model
            .age_rating
            .parse::<AgeRating>()
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(Film {
            id: Id::new(model.id),
            title: model.title,
            description: model.description,
            release_year: model.release_year,
            length: model.length,
            age_rating,
            poster: model.poster,
        })
    }
}
