//! Route definitions for the `/admin/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin/users`.
///
/// All routes require the `admin` role (enforced by handler extractors).
///
/// ```text
/// GET  /                     -> list_users
/// GET  /{id}                 -> get_user
/// PUT  /{id}                 -> update_user
/// POST /{id}/reset-password  -> reset_password
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::list_users))
        .route("/{id}", get(admin::get_user).put(admin::update_user))
        .route(
            "/{id}/reset-password",
            axum::routing::post(admin::reset_password),
        )
}
