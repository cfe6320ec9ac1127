//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of `users` joined with its role name
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub email: String,
    pub login: String,
    pub password: String,
    pub registration: DateTime<Utc>,
    pub info: Option<String>,
    pub reputation: i32,
    pub avatar: Option<String>,
    pub role: String,
    pub last_update: DateTime<Utc>,
}
