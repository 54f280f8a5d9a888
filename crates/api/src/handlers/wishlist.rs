//! Handlers for the `/wishlist` resource. All endpoints require authentication.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use parkside_core::error::CoreError;
use parkside_core::types::DbId;

use parkside_db::models::property::PropertyResponse;
use parkside_db::repositories::{PropertyRepo, WishlistRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/wishlist
///
/// The authenticated user's saved properties, most recently saved first.
pub async fn list_wishlist(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rows = WishlistRepo::list_properties_for_user(&state.pool, auth.user_id).await?;

    let properties: Vec<PropertyResponse> = rows.into_iter().map(PropertyResponse::from).collect();
    Ok(Json(DataResponse { data: properties }))
}

/// POST /api/v1/wishlist/{property_id}
///
/// Save a property. Saving one that is already saved is a 409; saving a
/// property that does not exist is a 404.
pub async fn add_to_wishlist(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(property_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    PropertyRepo::find_by_id(&state.pool, property_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id: property_id,
        }))?;

    let item = WishlistRepo::add(&state.pool, auth.user_id, property_id).await?;

    tracing::info!(
        user_id = auth.user_id,
        property_id,
        "Property saved to wishlist",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: item.id })))
}

/// DELETE /api/v1/wishlist/{property_id}
///
/// Remove a saved property. Returns 204 No Content, or 404 when the
/// property was never saved.
pub async fn remove_from_wishlist(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(property_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = WishlistRepo::remove(&state.pool, auth.user_id, property_id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "WishlistItem",
            id: property_id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}
