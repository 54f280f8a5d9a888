//! Handlers for the `/leads` resource: public submission plus the
//! `/admin/leads` pipeline management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use parkside_core::error::CoreError;
use parkside_core::pagination::{clamp_limit, clamp_page, offset, Pagination};
use parkside_core::types::DbId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use parkside_db::models::lead::{CreateLead, LeadResponse};
use parkside_db::models::status::LeadStatus;
use parkside_db::repositories::{LeadRepo, PropertyRepo};

use crate::error::{validation_error, AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PageParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /leads`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLeadRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 7, max = 20))]
    pub phone: String,
    #[validate(length(max = 2000))]
    pub message: Option<String>,
    pub property_id: Option<DbId>,
}

/// Query params for `GET /admin/leads`.
#[derive(Debug, Deserialize)]
pub struct LeadListQuery {
    /// Narrow to one pipeline status by its label (e.g. `New`).
    pub status: Option<String>,
}

/// Request body for `PUT /admin/leads/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateLeadStatusRequest {
    pub status: String,
}

/// One page of leads plus pagination metadata.
#[derive(Debug, Serialize)]
pub struct LeadPage {
    pub leads: Vec<LeadResponse>,
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// Public handler
// ---------------------------------------------------------------------------

/// POST /api/v1/leads
///
/// Public lead submission (contact form). New leads always enter the
/// pipeline in the `New` status. A referenced property must exist.
pub async fn create_lead(
    State(state): State<AppState>,
    Json(input): Json<CreateLeadRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(|e| validation_error(&e))?;

    if let Some(property_id) = input.property_id {
        PropertyRepo::find_by_id(&state.pool, property_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Property",
                id: property_id,
            }))?;
    }

    let create_dto = CreateLead {
        name: input.name,
        email: input.email,
        phone: input.phone,
        message: input.message,
        property_id: input.property_id,
    };

    let lead = LeadRepo::create(&state.pool, &create_dto).await?;

    tracing::info!(lead_id = lead.id, property_id = ?lead.property_id, "Lead submitted");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: LeadResponse::from(lead),
        }),
    ))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/leads
///
/// List leads newest first, optionally narrowed to one status.
pub async fn list_leads(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(query): Query<LeadListQuery>,
    Query(page_params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let status_id = match query.status.as_deref() {
        None => None,
        Some(label) => Some(parse_status(label)?.id()),
    };

    let page = clamp_page(page_params.page);
    let limit = clamp_limit(page_params.limit);

    let (rows, total) =
        LeadRepo::list(&state.pool, status_id, limit, offset(page, limit)).await?;

    let response = LeadPage {
        leads: rows.into_iter().map(LeadResponse::from).collect(),
        pagination: Pagination::new(page, limit, total),
    };
    Ok(Json(DataResponse { data: response }))
}

/// GET /api/v1/admin/leads/{id}
pub async fn get_lead(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let lead = LeadRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;

    Ok(Json(DataResponse {
        data: LeadResponse::from(lead),
    }))
}

/// PUT /api/v1/admin/leads/{id}/status
///
/// Move a lead along the pipeline. Transitions outside the fixed
/// progression (or out of a terminal state) are a 409.
pub async fn update_lead_status(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLeadStatusRequest>,
) -> AppResult<impl IntoResponse> {
    let next = parse_status(&input.status)?;

    let lead = LeadRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;

    let current = LeadStatus::from_label(LeadStatus::label_of(lead.status_id))
        .ok_or_else(|| AppError::InternalError(format!("Lead {id} has unknown status")))?;

    if !current.can_transition_to(next) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Illegal lead transition: {} -> {}",
            current.label(),
            next.label(),
        ))));
    }

    let updated = LeadRepo::update_status(&state.pool, id, next.id())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;

    tracing::info!(
        lead_id = id,
        user_id = admin.user_id,
        from = current.label(),
        to = next.label(),
        "Lead status updated",
    );

    Ok(Json(DataResponse {
        data: LeadResponse::from(updated),
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a status label, rejecting anything outside the fixed enumeration.
fn parse_status(label: &str) -> Result<LeadStatus, AppError> {
    LeadStatus::from_label(label).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Unknown lead status: {label}"
        )))
    })
}
