pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod leads;
pub mod properties;
pub mod users;
pub mod wishlist;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
///
/// /properties                          search (public, Active only)
/// /properties/{id}                     detail (public, bumps views)
///
/// /leads                               submit lead (public)
///
/// /wishlist                            list saved properties (auth)
/// /wishlist/{property_id}              save, remove (auth)
///
/// /users/me                            get, update own profile (auth)
/// /users/me/password                   change own password (auth)
///
/// /admin/stats                         dashboard counters (admin only)
///
/// /admin/properties                    list (all statuses), create
/// /admin/properties/{id}               get, update, delete
///
/// /admin/leads                         list (?status=, paginated)
/// /admin/leads/{id}                    get
/// /admin/leads/{id}/status             update pipeline status (PUT)
///
/// /admin/users                         list
/// /admin/users/{id}                    get, update (role promotion)
/// /admin/users/{id}/reset-password     reset password (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, refresh, logout).
        .nest("/auth", auth::router())
        // Public marketplace: search and listing detail.
        .nest("/properties", properties::router())
        // Public lead submission.
        .nest("/leads", leads::router())
        // Saved properties for the authenticated user.
        .nest("/wishlist", wishlist::router())
        // The authenticated user's own profile.
        .nest("/users", users::router())
        // Admin back office.
        .nest("/admin/stats", dashboard::router())
        .nest("/admin/properties", properties::admin_router())
        .nest("/admin/leads", leads::admin_router())
        .nest("/admin/users", admin::router())
}
