//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Migrations are applied on start-up. Tests skip when DATABASE_URL is unset.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::Duration;
use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use movie_core::Id;
use reqwest::StatusCode;

async fn register(server: &TestServer) -> RegisterRequest {
    let request = RegisterRequest::unique();
    let response = server.post("/users", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
    request
}

async fn sign_in(server: &TestServer, reg: &RegisterRequest) -> SessionResponse {
    let response = server
        .post("/sign-in", &SignInRequest::from_register(reg))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn new_user(server: &TestServer) -> SessionResponse {
    let reg = register(server).await;
    sign_in(server, &reg).await
}

async fn new_admin(server: &TestServer) -> SessionResponse {
    let reg = register(server).await;
    let session = sign_in(server, &reg).await;
    server.promote(Id::new(session.user.id)).await.unwrap();
    sign_in(server, &reg).await
}

async fn new_film(server: &TestServer, admin: &SessionResponse) -> FilmResponse {
    let response = server
        .post_auth("/films", &admin.token, &FilmRequest::unique())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_raw("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_raw("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Gate Tests
// ============================================================================

#[tokio::test]
async fn test_anonymous_request_redirected_to_sign_in() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/films").await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()["location"].to_str().unwrap().to_string();
    assert_eq!(location, "/api/v1/sign-in?message=Authorization%20needed");
}

#[tokio::test]
async fn test_user_listing_is_public() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    register(&server).await;

    let response = server.get("/users?limit=1").await.unwrap();
    let users: PageResponse<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(users.data.len(), 1);
    assert!(users.pagination.total >= 1);
}

#[tokio::test]
async fn test_session_cookie_is_accepted() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = new_user(&server).await;

    let response = server
        .client
        .get(format!("{}/api/v1/films", server.base_url()))
        .header("Cookie", format!("session={}", session.token))
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Registration and Session Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_sign_in() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let reg = register(&server).await;
    let session = sign_in(&server, &reg).await;

    assert_eq!(session.user.login, reg.login);
    assert_eq!(session.user.role, "USER");
    assert_eq!(session.user.reputation, 0);
    assert_eq!(session.token_type, "Bearer");
    assert!(session.expires_in > 0);
    assert!(!session.token.is_empty());
}

#[tokio::test]
async fn test_register_reports_every_violation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/users", &serde_json::json!({}))
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.error.code, "REGISTRATION_VALIDATION_ERROR");
    assert_eq!(
        body.violation_messages(),
        vec![
            "Email field is empty",
            "Login field is empty",
            "Password field is empty",
        ]
    );
}

#[tokio::test]
async fn test_register_duplicate() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let reg = register(&server).await;

    let response = server.post("/users", &reg).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(
        body.violation_messages(),
        vec![
            "User with such email already exists",
            "User with such login already exists",
        ]
    );
}

#[tokio::test]
async fn test_sign_in_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let reg = register(&server).await;

    let response = server
        .post(
            "/sign-in",
            &SignInRequest {
                login: reg.login.clone(),
                password: "WrongPass123".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_sign_out_clears_cookie() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = new_user(&server).await;

    let response = server
        .post_auth("/sign-out", &session.token, &serde_json::json!({}))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cookie = response.headers()["set-cookie"].to_str().unwrap().to_string();
    assert!(cookie.starts_with("session="));
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_update_own_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = new_user(&server).await;

    let response = server
        .patch_auth(
            &format!("/users/{}", session.user.id),
            &session.token,
            &serde_json::json!({ "info": "Film buff", "avatar": "/static/avatars/me.png" }),
        )
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.info.as_deref(), Some("Film buff"));
    assert!(user.avatar.ends_with("/me.png"));
}

#[tokio::test]
async fn test_cannot_edit_someone_else() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = new_user(&server).await;
    let bob = new_user(&server).await;

    let response = server
        .patch_auth(
            &format!("/users/{}", bob.user.id),
            &alice.token,
            &serde_json::json!({ "info": "hacked" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_admin_changes_role() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = new_admin(&server).await;
    let user = new_user(&server).await;

    let response = server
        .put_auth(
            &format!("/users/{}/role", user.user.id),
            &admin.token,
            &serde_json::json!({ "role": "ADMIN" }),
        )
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.role, "ADMIN");
}

#[tokio::test]
async fn test_deleted_user_is_gone() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = new_user(&server).await;
    let path = format!("/users/{}", session.user.id);

    let response = server.delete_auth(&path, &session.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&path, &session.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Film and Score Tests
// ============================================================================

#[tokio::test]
async fn test_film_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = new_admin(&server).await;
    let film = new_film(&server, &admin).await;

    assert_eq!(film.release_year, 1999);
    assert!(film.average_score.is_none());
    assert!(!film.poster.is_empty());

    let path = format!("/films/{}", film.id);
    let mut edit = FilmRequest::unique();
    edit.length = 140;
    let response = server.patch_auth(&path, &admin.token, &edit).await.unwrap();
    let edited: FilmResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(edited.length, 140);
    assert_eq!(edited.title, edit.title);

    let response = server.delete_auth(&path, &admin.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&path, &admin.token).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_FILM");
}

#[tokio::test]
async fn test_user_cannot_create_film() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = new_user(&server).await;

    let response = server
        .post_auth("/films", &user.token, &FilmRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_rating_replaces_earlier_score() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = new_admin(&server).await;
    let film = new_film(&server, &admin).await;
    let user = new_user(&server).await;
    let path = format!("/films/{}/scores", film.id);

    let response = server
        .post_auth(&path, &user.token, &RateRequest { value: 4 })
        .await
        .unwrap();
    let first: ScoreResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth(&path, &user.token, &RateRequest { value: 9 })
        .await
        .unwrap();
    let second: ScoreResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(second.value, 9);

    server
        .post_auth(&path, &admin.token, &RateRequest { value: 6 })
        .await
        .unwrap();

    let response = server.get_auth(&path, &user.token).await.unwrap();
    let scores: PageResponse<ScoreResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(scores.pagination.total, 2);

    let response = server
        .get_auth(&format!("/films/{}", film.id), &user.token)
        .await
        .unwrap();
    let film: FilmResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(film.average_score, Some(7.5));
}

#[tokio::test]
async fn test_score_out_of_range() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = new_admin(&server).await;
    let film = new_film(&server, &admin).await;

    let response = server
        .post_auth(
            &format!("/films/{}/scores", film.id),
            &admin.token,
            &RateRequest { value: 11 },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_only_owner_deletes_score() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = new_admin(&server).await;
    let film = new_film(&server, &admin).await;
    let alice = new_user(&server).await;
    let bob = new_user(&server).await;

    let response = server
        .post_auth(
            &format!("/films/{}/scores", film.id),
            &alice.token,
            &RateRequest { value: 8 },
        )
        .await
        .unwrap();
    let score: ScoreResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let path = format!("/scores/{}", score.id);

    let response = server.delete_auth(&path, &bob.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &alice.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/users/{}/scores", alice.user.id), &alice.token)
        .await
        .unwrap();
    let scores: PageResponse<ScoreResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(scores.data.is_empty());
    assert_eq!(scores.pagination.page, 1);
}

// ============================================================================
// Ban Tests
// ============================================================================

#[tokio::test]
async fn test_ban_blocks_sign_in_until_lifted() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = new_admin(&server).await;
    let reg = register(&server).await;
    let user = sign_in(&server, &reg).await;

    let response = server
        .post_auth("/bans", &admin.token, &CreateBanRequest::week(user.user.id))
        .await
        .unwrap();
    let ban: BanResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(ban.active);
    assert_eq!(ban.admin_id, admin.user.id);
    assert_eq!(ban.user.as_ref().map(|u| u.id), Some(user.user.id));

    let response = server
        .post("/sign-in", &SignInRequest::from_register(&reg))
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "USER_BANNED");
    assert_eq!(body.error.message, "User is banned");

    let response = server
        .delete_auth(&format!("/bans/{}", ban.id), &admin.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    sign_in(&server, &reg).await;
}

#[tokio::test]
async fn test_ban_validation_collects_violations() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = new_admin(&server).await;

    let response = server
        .post_auth(
            "/bans",
            &admin.token,
            &CreateBanRequest {
                user_id: None,
                start_date: None,
                end_date: None,
                reason: None,
            },
        )
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "CREATE_VALIDATION_ERROR");
    assert_eq!(
        body.violation_messages(),
        vec![
            "User id field is empty",
            "Start date field is empty",
            "End date field is empty",
            "Reason field is empty",
        ]
    );
}

#[tokio::test]
async fn test_admin_cannot_be_banned() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = new_admin(&server).await;
    let other = new_admin(&server).await;

    let response = server
        .post_auth("/bans", &admin.token, &CreateBanRequest::week(other.user.id))
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.violation_messages(), vec!["Not a user role"]);
}

#[tokio::test]
async fn test_update_ban_end_date() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = new_admin(&server).await;
    let user = new_user(&server).await;

    let request = CreateBanRequest::week(user.user.id);
    let start = request.start_date.unwrap();
    let response = server.post_auth("/bans", &admin.token, &request).await.unwrap();
    let ban: BanResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/bans/{}", ban.id);

    let response = server
        .patch_auth(
            &path,
            &admin.token,
            &UpdateBanRequest {
                start_date: None,
                end_date: Some(start - Duration::hours(1)),
            },
        )
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(
        body.violation_messages(),
        vec!["End date should be greater than start date"]
    );

    // An earlier start is not persisted, so the stored one still bounds the end
    let response = server
        .patch_auth(
            &path,
            &admin.token,
            &UpdateBanRequest {
                start_date: Some(start - Duration::days(10)),
                end_date: Some(start - Duration::days(1)),
            },
        )
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "UPDATE_VALIDATION_ERROR");

    let new_end = start + Duration::days(30);
    let response = server
        .patch_auth(
            &path,
            &admin.token,
            &UpdateBanRequest {
                start_date: None,
                end_date: Some(new_end),
            },
        )
        .await
        .unwrap();
    let updated: BanResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.end_date.timestamp(), new_end.timestamp());
    assert_eq!(updated.reason, ban.reason);
}

#[tokio::test]
async fn test_ban_listings() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = new_admin(&server).await;
    let user = new_user(&server).await;

    server
        .post_auth("/bans", &admin.token, &CreateBanRequest::week(user.user.id))
        .await
        .unwrap();

    let response = server
        .get_auth(&format!("/users/{}/bans", user.user.id), &admin.token)
        .await
        .unwrap();
    let bans: PageResponse<BanResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(bans.pagination.total, 1);

    let response = server
        .get_auth(
            &format!("/users/{}/issued-bans?page=5&limit=1", admin.user.id),
            &admin.token,
        )
        .await
        .unwrap();
    let bans: PageResponse<BanResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(bans.pagination.page, 1);
    assert_eq!(bans.pagination.limit, 1);
    assert_eq!(bans.pagination.total_pages, 1);
    assert_eq!(bans.data.len(), 1);
}

#[tokio::test]
async fn test_page_below_one_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = new_user(&server).await;

    let response = server.get_auth("/bans?page=0", &user.token).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_PAGE");
}
