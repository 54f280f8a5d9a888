//! Handlers for the authenticated user's own profile (`/users/me`).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use parkside_core::error::CoreError;
use serde::Deserialize;
use validator::Validate;

use parkside_db::models::user::{UpdateUser, UserResponse};
use parkside_db::repositories::UserRepo;

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{validation_error, AppError, AppResult};
use crate::handlers::admin::user_to_response;
use crate::handlers::auth::MIN_PASSWORD_LENGTH;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `PUT /users/me`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(length(min = 7, max = 20))]
    pub phone: Option<String>,
}

/// Request body for `PUT /users/me/password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/users/me
pub async fn me(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let response = user_to_response(&state, &user).await?;
    Ok(Json(response))
}

/// PUT /api/v1/users/me
///
/// Update the authenticated user's own profile fields. Role and active flag
/// are deliberately not reachable from here.
pub async fn update_me(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<Json<UserResponse>> {
    input.validate().map_err(|e| validation_error(&e))?;

    let update_dto = UpdateUser {
        name: input.name,
        phone: input.phone,
        ..Default::default()
    };

    let user = UserRepo::update(&state.pool, auth.user_id, &update_dto)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let response = user_to_response(&state, &user).await?;
    Ok(Json(response))
}

/// PUT /api/v1/users/me/password
///
/// Change the authenticated user's password after re-verifying the current
/// one. Returns 204 No Content.
pub async fn change_password(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let current_valid = verify_password(&input.current_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !current_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Current password is incorrect".into(),
        )));
    }

    validate_password_strength(&input.new_password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let hashed = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    UserRepo::update_password(&state.pool, auth.user_id, &hashed).await?;

    tracing::info!(user_id = auth.user_id, "Password changed");

    Ok(StatusCode::NO_CONTENT)
}
