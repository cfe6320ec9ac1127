//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use movie_core::{AgeRating, Id, Page, Role};

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// One page of a listing
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Page actually returned, after clamping
    pub page: i64,
    /// Page size limit used
    pub limit: i64,
    /// Rows across all pages
    pub total: i64,
    pub total_pages: i64,
}

impl<T> From<Page<T>> for PaginatedResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            pagination: PaginationMeta {
                page: page.page,
                limit: page.limit,
                total: page.total,
                total_pages: page.total_pages,
            },
            data: page.items,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Public view of an account. The password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDto {
    pub id: Id,
    pub email: String,
    pub login: String,
    pub registered_at: DateTime<Utc>,
    pub info: Option<String>,
    pub reputation: i32,
    /// Avatar path, the default avatar when none was uploaded
    pub avatar: String,
    pub role: Role,
}

/// Issued session with the signed-in user
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserDto,
}

// ============================================================================
// Ban Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BanDto {
    pub id: Id,
    pub user_id: Id,
    pub admin_id: Id,
    /// Banned user; `None` once the account has been deleted
    pub user: Option<UserDto>,
    /// Issuing admin; `None` once the account has been deleted
    pub admin: Option<UserDto>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub reason: String,
    pub active: bool,
}

// ============================================================================
// Film Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilmDto {
    pub id: Id,
    pub title: String,
    pub description: Option<String>,
    pub release_year: i32,
    pub length: i32,
    pub age_rating: AgeRating,
    /// Poster path, the default poster when none was uploaded
    pub poster: String,
    /// Mean score rounded to two decimals, `None` when unscored
    pub average_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreDto {
    pub id: Id,
    pub film_id: Id,
    pub user_id: Id,
    pub value: i32,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Form Responses
// ============================================================================

/// Describes a form a client should render
#[derive(Debug, Clone, Serialize)]
pub struct FormResponse {
    pub action: &'static str,
    pub method: &'static str,
    pub fields: Vec<FormField>,
    /// Why the client was sent here, if redirected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FormField {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub required: bool,
}

impl FormField {
    const fn required(name: &'static str, kind: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }
}

impl FormResponse {
    pub fn sign_in(message: Option<String>) -> Self {
        Self {
            action: "/api/v1/sign-in",
            method: "POST",
            fields: vec![
                FormField::required("login", "text"),
                FormField::required("password", "password"),
            ],
            message,
        }
    }

    pub fn create_user() -> Self {
        Self {
            action: "/api/v1/users",
            method: "POST",
            fields: vec![
                FormField::required("email", "email"),
                FormField::required("login", "text"),
                FormField::required("password", "password"),
                FormField::required("password_confirmation", "password"),
            ],
            message: None,
        }
    }
}

/// Body of the generic error view
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPageResponse {
    pub message: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
