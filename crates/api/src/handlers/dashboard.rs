//! Handler for the admin dashboard stats endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use parkside_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/stats
///
/// Dashboard counters, recomputed per request. Each counter is an
/// independent read; values may reflect slightly different instants under
/// concurrent writes, which the dashboard accepts.
pub async fn admin_stats(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<impl IntoResponse> {
    let stats = StatsRepo::dashboard(&state.pool).await?;
    Ok(Json(DataResponse { data: stats }))
}
