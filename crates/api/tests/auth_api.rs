//! HTTP-level integration tests for auth endpoints.
//!
//! Tests cover registration, login, token refresh with rotation, logout,
//! account lockout, and RBAC enforcement.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth};
use sqlx::SqlitePool;

use common::{create_test_user, login_user};

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Successful registration returns 201 with tokens and the `user` role.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_success(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Asha Rao",
        "email": "asha@example.com",
        "password": "a-strong-password"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert_eq!(json["user"]["name"], "Asha Rao");
    assert_eq!(json["user"]["email"], "asha@example.com");
    assert_eq!(json["user"]["role"], "user");
}

/// Registering an already-used email returns 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_email(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "First",
        "email": "dup@example.com",
        "password": "a-strong-password"
    });
    let response = post_json(app.clone(), "/api/v1/auth/register", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

/// A malformed email is rejected by input validation.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_invalid_email(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Typo",
        "email": "not-an-email",
        "password": "a-strong-password"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A too-short password is rejected with a clear message.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_weak_password(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Weak",
        "email": "weak@example.com",
        "password": "short"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns 200 with access_token, refresh_token, and user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: SqlitePool) {
    let (user, password) = create_test_user(&pool, "login@test.com", 2).await;
    let app = common::build_test_app(pool);

    let json = login_user(app, "login@test.com", &password).await;

    assert!(json["access_token"].is_string(), "response must contain access_token");
    assert!(json["refresh_token"].is_string(), "response must contain refresh_token");
    assert!(json["expires_in"].is_number(), "response must contain expires_in");
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["email"], "login@test.com");
    assert_eq!(json["user"]["role"], "admin");
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: SqlitePool) {
    let (_user, _password) = create_test_user(&pool, "wrongpw@test.com", 1).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "wrongpw@test.com", "password": "incorrect" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with an unknown email returns the same 401 as a wrong password so
/// the response never reveals whether an account exists.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_email_indistinguishable(pool: SqlitePool) {
    let (_user, _password) = create_test_user(&pool, "exists@test.com", 1).await;
    let app = common::build_test_app(pool);

    let wrong_pw = post_json(
        app.clone(),
        "/api/v1/auth/login",
        serde_json::json!({ "email": "exists@test.com", "password": "incorrect" }),
    )
    .await;
    let unknown = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": "ghost@test.com", "password": "whatever" }),
    )
    .await;

    assert_eq!(wrong_pw.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);

    let a = body_json(wrong_pw).await;
    let b = body_json(unknown).await;
    assert_eq!(a["error"], b["error"], "both failures must share one message");
}

/// Login to a deactivated account returns 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_inactive_user(pool: SqlitePool) {
    let (user, password) = create_test_user(&pool, "inactive@test.com", 1).await;
    parkside_db::repositories::UserRepo::deactivate(&pool, user.id)
        .await
        .expect("deactivation should succeed");

    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "inactive@test.com", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Five consecutive failures lock the account; the next correct-password
/// attempt is still rejected with 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_account_lockout(pool: SqlitePool) {
    let (_user, password) = create_test_user(&pool, "locked@test.com", 1).await;
    let app = common::build_test_app(pool);

    for _ in 0..5 {
        let body = serde_json::json!({ "email": "locked@test.com", "password": "incorrect" });
        let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let body = serde_json::json!({ "email": "locked@test.com", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Refresh & logout
// ---------------------------------------------------------------------------

/// A valid refresh token returns new tokens; the old one is rotated out.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_token_refresh_with_rotation(pool: SqlitePool) {
    let (_user, password) = create_test_user(&pool, "refresher@test.com", 1).await;
    let app = common::build_test_app(pool);

    let login_json = login_user(app.clone(), "refresher@test.com", &password).await;
    let refresh_token = login_json["refresh_token"].as_str().unwrap();

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app.clone(), "/api/v1/auth/refresh", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_ne!(json["refresh_token"], login_json["refresh_token"]);

    // The first refresh token was revoked by rotation.
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout revokes every session; the refresh token stops working.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_sessions(pool: SqlitePool) {
    let (_user, password) = create_test_user(&pool, "leaver@test.com", 1).await;
    let app = common::build_test_app(pool);

    let login_json = login_user(app.clone(), "leaver@test.com", &password).await;
    let access_token = login_json["access_token"].as_str().unwrap();
    let refresh_token = login_json["refresh_token"].as_str().unwrap();

    let response = common::post_auth(app.clone(), "/api/v1/auth/logout", access_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// RBAC
// ---------------------------------------------------------------------------

/// Admin routes reject missing tokens with 401 and non-admin tokens with 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_routes_are_role_gated(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());

    // No token at all.
    let response = common::get(app.clone(), "/api/v1/admin/stats").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Authenticated but not an admin.
    let token = common::user_token(&pool, app.clone()).await;
    let response = get_auth(app.clone(), "/api/v1/admin/stats", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // A garbage token is 401.
    let response = get_auth(app, "/api/v1/admin/stats", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// The profile endpoint reflects admin promotion after re-login.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_role_promotion_reflected_at_login(pool: SqlitePool) {
    let (user, password) = create_test_user(&pool, "promoted@test.com", 1).await;
    let app = common::build_test_app(pool.clone());

    let json = login_user(app.clone(), "promoted@test.com", &password).await;
    assert_eq!(json["user"]["role"], "user");

    let update = parkside_db::models::user::UpdateUser {
        role_id: Some(2),
        ..Default::default()
    };
    parkside_db::repositories::UserRepo::update(&pool, user.id, &update)
        .await
        .unwrap();

    let json = login_user(app.clone(), "promoted@test.com", &password).await;
    assert_eq!(json["user"]["role"], "admin");

    // The fresh admin token now opens the back office.
    let token = json["access_token"].as_str().unwrap();
    let response = get_auth(app, "/api/v1/admin/stats", token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// An expired access token cannot be used (sanity check via bogus token
/// shape already covered; here: tampered signature).
#[sqlx::test(migrations = "../db/migrations")]
async fn test_tampered_token_rejected(pool: SqlitePool) {
    let (_user, password) = create_test_user(&pool, "tamper@test.com", 1).await;
    let app = common::build_test_app(pool);

    let json = login_user(app.clone(), "tamper@test.com", &password).await;
    let mut token = json["access_token"].as_str().unwrap().to_string();
    token.pop();
    token.push('x');

    let response = post_json_auth(
        app,
        "/api/v1/wishlist/1",
        &token,
        serde_json::Value::Null,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
