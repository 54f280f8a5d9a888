//! Route definition for the admin dashboard stats endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/admin/stats`.
///
/// ```text
/// GET / -> admin_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard::admin_stats))
}
