//! Error handling utilities for repositories

use movie_core::error::DomainError;
use sqlx::Error as SqlxError;
use tracing::error;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    error!(error = %e, "Database operation failed");
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique(db_err.constraint());
        }
    }
    map_db_error(e)
}

/// Translate a unique violation on `users` into the matching conflict
pub fn user_conflict(constraint: Option<&str>) -> DomainError {
    match constraint {
        Some("users_login_live_idx") => DomainError::LoginAlreadyExists,
        _ => DomainError::EmailAlreadyExists,
    }
}
