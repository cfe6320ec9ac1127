//! Film conversion

use movie_common::MediaConfig;
use movie_core::traits::ScoreRepository;
use movie_core::{DomainError, Film, NewFilm};

use super::media;
use crate::dto::{FilmDto, FilmRequest};

/// Converts films, resolving posters and the average score
#[derive(Clone, Copy)]
pub struct FilmConverter<'a> {
    scores: &'a dyn ScoreRepository,
    media: &'a MediaConfig,
}

impl<'a> FilmConverter<'a> {
    pub fn new(scores: &'a dyn ScoreRepository, media: &'a MediaConfig) -> Self {
        Self { scores, media }
    }

    pub async fn to_dto(&self, film: &Film) -> Result<FilmDto, DomainError> {
        let average_score = self
            .scores
            .average_for_film(film.id)
            .await?
            .map(round_to_hundredths);

        Ok(FilmDto {
            id: film.id,
            title: film.title.clone(),
            description: film.description.clone(),
            release_year: film.release_year,
            length: film.length,
            age_rating: film.age_rating,
            poster: media::resolve(
                &self.media.poster_url_prefix,
                &self.media.default_poster,
                film.poster.as_deref(),
            ),
            average_score,
        })
    }

    pub async fn to_dtos(&self, films: &[Film]) -> Result<Vec<FilmDto>, DomainError> {
        let mut dtos = Vec::with_capacity(films.len());
        for film in films {
            dtos.push(self.to_dto(film).await?);
        }
        Ok(dtos)
    }

    pub fn to_entity(&self, request: &FilmRequest) -> NewFilm {
        NewFilm {
            title: request.title.clone(),
            description: request.description.clone(),
            release_year: request.release_year,
            length: request.length,
            age_rating: request.age_rating,
            poster: media::file_name(&self.media.default_poster, request.poster.as_deref()),
        }
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
