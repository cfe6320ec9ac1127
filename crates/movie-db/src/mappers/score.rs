//! Score entity <-> model mapper

use movie_core::entities::Score;
use movie_core::value_objects::Id;

use crate::models::ScoreModel;

impl From<ScoreModel> for Score {
    fn from(model: ScoreModel) -> Self {
        Score {
            id: Id::new(model.id),
            film_id: Id::new(model.film_id),
            user_id: Id::new(model.user_id),
            value: model.value,
            created_at: model.created_at,
            last_update: model.last_update,
        }
    }
}
