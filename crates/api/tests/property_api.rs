//! HTTP-level integration tests for property search, detail, and the
//! back-office property management.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, get_auth, post_json_auth, put_json_auth, seed_property};
use sqlx::SqlitePool;

use parkside_db::models::status::PropertyStatus;
use parkside_db::repositories::PropertyRepo;

/// Flip a seeded property to another status directly in the store.
async fn set_status(pool: &SqlitePool, id: i64, status: PropertyStatus) {
    sqlx::query("UPDATE properties SET status_id = $2 WHERE id = $1")
        .bind(id)
        .bind(status.id())
        .execute(pool)
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Public search
// ---------------------------------------------------------------------------

/// The search envelope is `{ data: { properties, pagination } }`, and only
/// Active listings appear by default.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_envelope_and_active_default(pool: SqlitePool) {
    let visible = seed_property(&pool, "Visible", 100_000.0).await;
    let hidden = seed_property(&pool, "Hidden", 100_000.0).await;
    set_status(&pool, hidden, PropertyStatus::Inactive).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/properties").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let properties = json["data"]["properties"].as_array().unwrap();
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0]["id"], visible);
    assert_eq!(properties[0]["status"], "Active");
    assert_eq!(json["data"]["pagination"]["total"], 1);
}

/// Query-string filters flow through to the result set; pagination metadata
/// matches the fixed contract.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_pagination_contract(pool: SqlitePool) {
    for i in 0..5 {
        seed_property(&pool, &format!("Flat {i}"), 150_000.0).await;
    }
    // One listing priced outside the filter range.
    seed_property(&pool, "Penthouse", 900_000.0).await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/properties?minPrice=100000&maxPrice=200000&page=1&limit=2",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["properties"].as_array().unwrap().len(), 2);
    assert_eq!(
        json["data"]["pagination"],
        serde_json::json!({ "page": 1, "limit": 2, "total": 5, "pages": 3 })
    );
}

/// A page beyond the last returns an empty list, not an error.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_page_past_end(pool: SqlitePool) {
    seed_property(&pool, "Only one", 100_000.0).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/properties?page=7&limit=10").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["properties"].as_array().unwrap().is_empty());
    assert_eq!(json["data"]["pagination"]["total"], 1);
}

/// Empty-string query values read as "no constraint".
#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_empty_params_are_unset(pool: SqlitePool) {
    seed_property(&pool, "Flat", 100_000.0).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/properties?minPrice=&city=&amenities=").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["pagination"]["total"], 1);
}

/// A non-numeric value for a numeric filter is a 400 from deserialization.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_malformed_numeric_filter(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/properties?minPrice=cheap").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Unknown enum-ish filter values produce an empty result set, not an error.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_unknown_category_is_empty(pool: SqlitePool) {
    seed_property(&pool, "Flat", 100_000.0).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/properties?category=Castle").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["pagination"]["total"], 0);
}

// ---------------------------------------------------------------------------
// Public detail
// ---------------------------------------------------------------------------

/// Detail reads return the payload and bump the views counter.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_detail_bumps_views(pool: SqlitePool) {
    let id = seed_property(&pool, "Counted", 100_000.0).await;
    let app = common::build_test_app(pool.clone());

    let response = get(app.clone(), &format!("/api/v1/properties/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["views"], 1);
    assert_eq!(json["data"]["payload"]["location"]["city"], "Pune");

    let response = get(app, &format!("/api/v1/properties/{id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["views"], 2);

    let row = PropertyRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(row.views, 2);
}

/// Inactive listings 404 on the public detail route, same as missing ones.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_detail_hides_inactive(pool: SqlitePool) {
    let id = seed_property(&pool, "Gone", 100_000.0).await;
    set_status(&pool, id, PropertyStatus::Inactive).await;
    let app = common::build_test_app(pool);

    let hidden = get(app.clone(), &format!("/api/v1/properties/{id}")).await;
    let missing = get(app, "/api/v1/properties/999999").await;

    assert_eq!(hidden.status(), StatusCode::NOT_FOUND);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Back office
// ---------------------------------------------------------------------------

/// Admins can create a listing; the payload invariants are enforced.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_create_property(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let token = common::admin_token(&pool, app.clone()).await;

    let body = serde_json::json!({
        "title": "New tower",
        "payload": {
            "category": "Commercial",
            "purpose": "Lease",
            "price": 5_000_000.0,
            "area": 12_000.0,
            "location": { "city": "Mumbai", "state": "Maharashtra" },
            "businessType": ["Office", "Retail"]
        }
    });
    let response = post_json_auth(app.clone(), "/api/v1/admin/properties", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "Active");
    assert_eq!(json["data"]["payload"]["businessType"][0], "Office");

    // Negative price violates the payload invariant.
    let body = serde_json::json!({
        "title": "Bad",
        "payload": {
            "category": "Residential",
            "purpose": "Buy",
            "price": -1.0,
            "area": 100.0,
            "location": { "city": "Pune", "state": "MH" }
        }
    });
    let response = post_json_auth(app, "/api/v1/admin/properties", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Non-admins cannot reach the back office.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_property_requires_admin(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let token = common::user_token(&pool, app.clone()).await;

    let body = serde_json::json!({ "title": "Nope", "payload": {} });
    let response = post_json_auth(app, "/api/v1/admin/properties", &token, body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Admin update can change the status by label; unknown labels are rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_update_status(pool: SqlitePool) {
    let id = seed_property(&pool, "For sale", 100_000.0).await;
    let app = common::build_test_app(pool.clone());
    let token = common::admin_token(&pool, app.clone()).await;

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/properties/{id}"),
        &token,
        serde_json::json!({ "status": "Sold" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "Sold");
    assert_eq!(json["data"]["title"], "For sale", "title untouched by partial update");

    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/properties/{id}"),
        &token,
        serde_json::json!({ "status": "Demolished" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// The back-office list sees all statuses; admin detail does not bump views.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_list_and_detail(pool: SqlitePool) {
    let active = seed_property(&pool, "Active", 100_000.0).await;
    let sold = seed_property(&pool, "Sold", 100_000.0).await;
    set_status(&pool, sold, PropertyStatus::Sold).await;

    let app = common::build_test_app(pool.clone());
    let token = common::admin_token(&pool, app.clone()).await;

    let response = get_auth(app.clone(), "/api/v1/admin/properties", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["pagination"]["total"], 2);

    let response = get_auth(
        app,
        &format!("/api/v1/admin/properties/{active}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let row = PropertyRepo::find_by_id(&pool, active).await.unwrap().unwrap();
    assert_eq!(row.views, 0, "admin detail must not bump views");
}

/// Deleting a listing removes it; a second delete is a 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_delete(pool: SqlitePool) {
    let id = seed_property(&pool, "Doomed", 100_000.0).await;
    let app = common::build_test_app(pool.clone());
    let token = common::admin_token(&pool, app.clone()).await;

    let response = delete_auth(app.clone(), &format!("/api/v1/admin/properties/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(app, &format!("/api/v1/admin/properties/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
