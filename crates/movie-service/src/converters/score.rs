//! Score mappers

use movie_core::Score;

use crate::dto::ScoreDto;

impl From<&Score> for ScoreDto {
    fn from(score: &Score) -> Self {
        Self {
            id: score.id,
            film_id: score.film_id,
            user_id: score.user_id,
            value: score.value,
            created_at: score.created_at,
        }
    }
}

impl From<Score> for ScoreDto {
    fn from(score: Score) -> Self {
        Self::from(&score)
    }
}
