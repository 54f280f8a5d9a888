//! Route definitions for lead submission and pipeline management.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::leads;
use crate::state::AppState;

/// Public routes mounted at `/leads`.
///
/// ```text
/// POST / -> create_lead
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(leads::create_lead))
}

/// Admin routes mounted at `/admin/leads`.
///
/// All routes require the `admin` role (enforced by handler extractors).
///
/// ```text
/// GET /               -> list_leads (?status=, paginated)
/// GET /{id}           -> get_lead
/// PUT /{id}/status    -> update_lead_status
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(leads::list_leads))
        .route("/{id}", get(leads::get_lead))
        .route("/{id}/status", put(leads::update_lead_status))
}
