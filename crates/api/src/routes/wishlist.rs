//! Route definitions for the `/wishlist` resource.
//!
//! All endpoints require authentication.

use axum::routing::get;
use axum::Router;

use crate::handlers::wishlist;
use crate::state::AppState;

/// Routes mounted at `/wishlist`.
///
/// ```text
/// GET    /                -> list_wishlist
/// POST   /{property_id}   -> add_to_wishlist
/// DELETE /{property_id}   -> remove_from_wishlist
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::list_wishlist))
        .route(
            "/{property_id}",
            axum::routing::post(wishlist::add_to_wishlist).delete(wishlist::remove_from_wishlist),
        )
}
