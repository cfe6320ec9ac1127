//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for integration tests.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique suffix, stable within a run and distinct across runs
pub fn unique_suffix() -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}_{n}", Utc::now().timestamp_millis())
}

pub const TEST_PASSWORD: &str = "TestPass123";

/// Registration form
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub login: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("test{suffix}@example.com"),
            login: format!("user_{suffix}"),
            password: TEST_PASSWORD.to_string(),
            password_confirmation: TEST_PASSWORD.to_string(),
        }
    }
}

/// Sign-in form
#[derive(Debug, Serialize)]
pub struct SignInRequest {
    pub login: String,
    pub password: String,
}

impl SignInRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            login: reg.login.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Issued session
#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// Public user view
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub login: String,
    pub info: Option<String>,
    pub reputation: i32,
    pub avatar: String,
    pub role: String,
}

/// Film form
#[derive(Debug, Serialize)]
pub struct FilmRequest {
    pub title: String,
    pub description: Option<String>,
    pub release_year: i32,
    pub length: i32,
    pub age_rating: String,
    pub poster: Option<String>,
}

impl FilmRequest {
    pub fn unique() -> Self {
        Self {
            title: format!("Test Film {}", unique_suffix()),
            description: Some("A test film".to_string()),
            release_year: 1999,
            length: 136,
            age_rating: "R".to_string(),
            poster: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FilmResponse {
    pub id: i64,
    pub title: String,
    pub release_year: i32,
    pub length: i32,
    pub age_rating: String,
    pub poster: String,
    pub average_score: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct RateRequest {
    pub value: i32,
}

#[derive(Debug, Deserialize)]
pub struct ScoreResponse {
    pub id: i64,
    pub film_id: i64,
    pub user_id: i64,
    pub value: i32,
}

/// Ban form
#[derive(Debug, Serialize)]
pub struct CreateBanRequest {
    pub user_id: Option<i64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub reason: Option<String>,
}

impl CreateBanRequest {
    /// A week-long ban starting now
    pub fn week(user_id: i64) -> Self {
        let start = Utc::now() - Duration::minutes(1);
        Self {
            user_id: Some(user_id),
            start_date: Some(start),
            end_date: Some(start + Duration::days(7)),
            reason: Some("Spoilers in reviews".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateBanRequest {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct BanResponse {
    pub id: i64,
    pub user_id: i64,
    pub admin_id: i64,
    pub user: Option<UserResponse>,
    pub admin: Option<UserResponse>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub reason: String,
    pub active: bool,
}

/// Paginated listing
#[derive(Debug, Deserialize)]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Deserialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Messages of the structured violations, in order
    pub fn violation_messages(&self) -> Vec<String> {
        self.error
            .details
            .as_ref()
            .and_then(|d| d.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v["message"].as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}
