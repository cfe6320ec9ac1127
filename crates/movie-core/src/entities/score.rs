//! Score entity - a user's rating of a film

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Stored score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub id: Id,
    pub film_id: Id,
    pub user_id: Id,
    pub value: i32,
    pub created_at: DateTime<Utc>,
    pub last_update: DateTime<Utc>,
}

impl Score {
    pub const MIN_VALUE: i32 = 1;
    pub const MAX_VALUE: i32 = 10;

    /// Check a raw value against the allowed range
    pub fn is_valid_value(value: i32) -> bool {
        (Self::MIN_VALUE..=Self::MAX_VALUE).contains(&value)
    }
}
