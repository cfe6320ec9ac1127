//! Ban entity - an admin-issued suspension of a user

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Stored ban
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ban {
    pub id: Id,
    /// Banned user
    pub user_id: Id,
    /// Admin who issued the ban
    pub admin_id: Id,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub reason: String,
    pub last_update: DateTime<Utc>,
}

impl Ban {
    /// A ban is active until its end date passes
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.end_date > now
    }
}

/// Data for inserting a ban
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBan {
    pub user_id: Id,
    pub admin_id: Id,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub reason: String,
}
