//! Handlers for the `/properties` resource (public marketplace search and
//! detail) and the `/admin/properties` back office.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use parkside_core::error::CoreError;
use parkside_core::filters::SearchFilters;
use parkside_core::pagination::{clamp_limit, clamp_page, Pagination};
use parkside_core::types::DbId;
use serde::Serialize;

use parkside_db::models::property::{CreateProperty, PropertyResponse, UpdateProperty};
use parkside_db::models::status::{PropertyStatus, StatusId};
use parkside_db::repositories::PropertyRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PageParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One page of search results plus pagination metadata.
#[derive(Debug, Serialize)]
pub struct PropertySearchPage {
    pub properties: Vec<PropertyResponse>,
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// Public marketplace handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/properties
///
/// Filtered, sorted, paginated property search. Only `Active` listings are
/// eligible unless the `status` filter explicitly overrides.
pub async fn search_properties(
    State(state): State<AppState>,
    Query(filters): Query<SearchFilters>,
    Query(page_params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(page_params.page);
    let limit = clamp_limit(page_params.limit);

    let (rows, total) = PropertyRepo::search(&state.pool, &filters, page, limit).await?;

    tracing::debug!(
        results = rows.len(),
        total,
        page,
        sort_by = %filters.sort_by,
        "Property search executed",
    );

    let response = PropertySearchPage {
        properties: rows.into_iter().map(PropertyResponse::from).collect(),
        pagination: Pagination::new(page, limit, total),
    };
    Ok(Json(DataResponse { data: response }))
}

/// GET /api/v1/properties/{id}
///
/// Public listing detail. Bumps the views counter. Inactive listings are
/// indistinguishable from missing ones.
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut property = PropertyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }))?;

    if property.status_id == PropertyStatus::Inactive.id() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }));
    }

    PropertyRepo::increment_views(&state.pool, id).await?;
    property.views += 1;

    Ok(Json(DataResponse {
        data: PropertyResponse::from(property),
    }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/properties
///
/// Back-office listing: same filters and pagination as the public search,
/// but no Active-only default and no view-count side effects.
pub async fn admin_list_properties(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(filters): Query<SearchFilters>,
    Query(page_params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(page_params.page);
    let limit = clamp_limit(page_params.limit);

    let (rows, total) =
        PropertyRepo::search_all_statuses(&state.pool, &filters, page, limit).await?;

    let response = PropertySearchPage {
        properties: rows.into_iter().map(PropertyResponse::from).collect(),
        pagination: Pagination::new(page, limit, total),
    };
    Ok(Json(DataResponse { data: response }))
}

/// GET /api/v1/admin/properties/{id}
///
/// Back-office detail: any status, no view bump.
pub async fn admin_get_property(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let property = PropertyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }))?;

    Ok(Json(DataResponse {
        data: PropertyResponse::from(property),
    }))
}

/// POST /api/v1/admin/properties
///
/// Create a listing. The payload's enumerations are enforced by its type;
/// price/area invariants are validated here before touching the store.
pub async fn create_property(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateProperty>,
) -> AppResult<impl IntoResponse> {
    input
        .payload
        .validate()
        .map_err(AppError::Core)?;

    let status_id = resolve_status(input.status.as_deref())?.unwrap_or(PropertyStatus::Active.id());

    let property = PropertyRepo::create(&state.pool, &input, status_id).await?;

    tracing::info!(
        property_id = property.id,
        user_id = admin.user_id,
        "Property created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: PropertyResponse::from(property),
        }),
    ))
}

/// PUT /api/v1/admin/properties/{id}
///
/// Partial update; a present payload replaces the stored one wholesale.
pub async fn update_property(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProperty>,
) -> AppResult<impl IntoResponse> {
    if let Some(payload) = &input.payload {
        payload.validate().map_err(AppError::Core)?;
    }
    let status_id = resolve_status(input.status.as_deref())?;

    let property = PropertyRepo::update(&state.pool, id, &input, status_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }))?;

    tracing::info!(property_id = id, user_id = admin.user_id, "Property updated");

    Ok(Json(DataResponse {
        data: PropertyResponse::from(property),
    }))
}

/// DELETE /api/v1/admin/properties/{id}
///
/// Remove a listing. Returns 204 No Content.
pub async fn delete_property(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PropertyRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }));
    }

    tracing::info!(property_id = id, user_id = admin.user_id, "Property deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve an optional status label to its ID, rejecting labels outside the
/// fixed enumeration. Writes validate strictly; only search filters flow
/// through unvalidated.
fn resolve_status(label: Option<&str>) -> Result<Option<StatusId>, AppError> {
    match label {
        None => Ok(None),
        Some(label) => PropertyStatus::from_label(label)
            .map(|s| Some(s.id()))
            .ok_or_else(|| {
                AppError::Core(CoreError::Validation(format!(
                    "Unknown property status: {label}"
                )))
            }),
    }
}
