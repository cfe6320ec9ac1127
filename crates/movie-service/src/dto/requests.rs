//! Request DTOs for API endpoints
//!
//! Registration and ban requests keep every field optional: missing values
//! are reported by the rule validators together with every other violation.
//! Film, profile and score requests carry `validator` rules instead.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use movie_core::{AgeRating, Id, Role};

use crate::validation::{BanDraft, RegistrationCandidate};

// ============================================================================
// Session Requests
// ============================================================================

/// Sign-in form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// New account form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    /// Repeated password; skipped when absent
    #[serde(default)]
    pub password_confirmation: Option<String>,
}

impl RegisterRequest {
    pub fn candidate(&self) -> RegistrationCandidate<'_> {
        RegistrationCandidate {
            email: self.email.as_deref(),
            login: self.login.as_deref(),
            password: self.password.as_deref(),
        }
    }
}

/// Profile update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(max = 1000, message = "Info must be at most 1000 characters"))]
    pub info: Option<String>,

    /// Avatar path or file name
    #[validate(length(min = 1, max = 255, message = "Avatar must be 1-255 characters"))]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ChangeRoleRequest {
    pub role: Role,
}

// ============================================================================
// Ban Requests
// ============================================================================

/// New ban. The issuing admin is the signed-in principal.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBanRequest {
    #[serde(default)]
    pub user_id: Option<Id>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl CreateBanRequest {
    pub fn into_draft(self, admin_id: Id) -> BanDraft {
        BanDraft {
            user_id: self.user_id,
            admin_id: Some(admin_id),
            start_date: self.start_date,
            end_date: self.end_date,
            reason: self.reason,
        }
    }
}

/// Ban change. Only the end date is stored; the start date, when given,
/// is only used to check ordering.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBanRequest {
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}

// ============================================================================
// Film Requests
// ============================================================================

/// Film create/replace form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FilmRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 1888, max = 2100, message = "Release year must be 1888-2100"))]
    pub release_year: i32,

    /// Running time in minutes
    #[validate(range(min = 1, max = 1000, message = "Length must be 1-1000 minutes"))]
    pub length: i32,

    pub age_rating: AgeRating,

    /// Poster path or file name
    pub poster: Option<String>,
}

// ============================================================================
// Score Requests
// ============================================================================

#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct RateFilmRequest {
    #[validate(range(min = 1, max = 10, message = "Score must be 1-10"))]
    pub value: i32,
}
