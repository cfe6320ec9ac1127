//! Ban entity <-> model mapper

use movie_core::entities::Ban;
use movie_core::value_objects::Id;

use crate::models::BanModel;

impl From<BanModel> for Ban {
    fn from(model: BanModel) -> Self {
        Ban {
            id: Id::new(model.id),
            user_id: Id::new(model.user_id),
            admin_id: Id::new(model.admin_id),
            start_date: model.start_date,
            end_date: model.end_date,
            reason: model.reason,
            last_update: model.last_update,
        }
    }
}
