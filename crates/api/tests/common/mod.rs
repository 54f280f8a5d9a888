//! Shared helpers for HTTP-level integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use parkside_api::auth::jwt::JwtConfig;
use parkside_api::config::ServerConfig;
use parkside_api::router::build_app_router;
use parkside_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a request through the router and return the raw response.
async fn send(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, "GET", uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, "GET", uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, "POST", uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, "POST", uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, "POST", uri, Some(token), None).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, "PUT", uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, "DELETE", uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
}

// ---------------------------------------------------------------------------
// Seeding helpers
// ---------------------------------------------------------------------------

/// Create a user directly in the database and return `(user, password)`.
pub async fn create_test_user(
    pool: &SqlitePool,
    email: &str,
    role_id: i64,
) -> (parkside_db::models::user::User, String) {
    let password = "test_password_123!";
    let hashed =
        parkside_api::auth::password::hash_password(password).expect("hashing should succeed");
    let input = parkside_db::models::user::CreateUser {
        name: "Test User".to_string(),
        email: email.to_string(),
        phone: None,
        password_hash: hashed,
        role_id,
    };
    let user = parkside_db::repositories::UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Log in a user via the API and return the JSON response containing
/// `access_token`, `refresh_token`, and `user` info.
pub async fn login_user(app: Router, email: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await
}

/// Create an admin user and return a fresh access token for it.
pub async fn admin_token(pool: &SqlitePool, app: Router) -> String {
    let (_user, password) = create_test_user(pool, "admin@test.com", 2).await;
    let json = login_user(app, "admin@test.com", &password).await;
    json["access_token"].as_str().unwrap().to_string()
}

/// Create a regular user and return a fresh access token for it.
pub async fn user_token(pool: &SqlitePool, app: Router) -> String {
    let (_user, password) = create_test_user(pool, "user@test.com", 1).await;
    let json = login_user(app, "user@test.com", &password).await;
    json["access_token"].as_str().unwrap().to_string()
}

/// Build a minimal valid listing payload for seeding.
pub fn test_payload(price: f64) -> parkside_core::listing::PropertyPayload {
    serde_json::from_value(serde_json::json!({
        "category": "Residential",
        "purpose": "Buy",
        "price": price,
        "area": 1000.0,
        "location": { "city": "Pune", "state": "Maharashtra" },
        "amenities": ["Gym"]
    }))
    .expect("test payload should deserialize")
}

/// Insert a property through the repository and return its id.
pub async fn seed_property(pool: &SqlitePool, title: &str, price: f64) -> i64 {
    let input = parkside_db::models::property::CreateProperty {
        title: title.to_string(),
        payload: test_payload(price),
        status: None,
    };
    parkside_db::repositories::PropertyRepo::create(
        pool,
        &input,
        parkside_db::models::status::PropertyStatus::Active.id(),
    )
    .await
    .expect("property creation should succeed")
    .id
}
