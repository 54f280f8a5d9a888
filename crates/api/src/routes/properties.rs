//! Route definitions for public property search/detail and the back-office
//! property management.

use axum::routing::get;
use axum::Router;

use crate::handlers::properties;
use crate::state::AppState;

/// Public routes mounted at `/properties`.
///
/// ```text
/// GET /      -> search_properties
/// GET /{id}  -> get_property (bumps views)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(properties::search_properties))
        .route("/{id}", get(properties::get_property))
}

/// Admin routes mounted at `/admin/properties`.
///
/// All routes require the `admin` role (enforced by handler extractors).
///
/// ```text
/// GET    /      -> admin_list_properties
/// POST   /      -> create_property
/// GET    /{id}  -> admin_get_property
/// PUT    /{id}  -> update_property
/// DELETE /{id}  -> delete_property
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(properties::admin_list_properties).post(properties::create_property),
        )
        .route(
            "/{id}",
            get(properties::admin_get_property)
                .put(properties::update_property)
                .delete(properties::delete_property),
        )
}
