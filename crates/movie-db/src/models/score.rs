//! Score database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for scores table
#[derive(Debug, Clone, FromRow)]
pub struct ScoreModel {
    pub id: i64,
    pub film_id: i64,
    pub user_id: i64,
    pub value: i32,
    pub created_at: DateTime<Utc>,
    pub last_update: DateTime<Utc>,
}
