//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vhub_core::error::CoreError;
use vhub_core::types::DbId;
use vhub_db::models::user::{CreateUser, UpdateUser, User};

use super::{reject_blank, require_non_blank};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/users
///
/// Emails are unique, compared case-insensitively.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    require_non_blank("username", &input.username)?;
    require_non_blank("email", &input.email)?;
    if state.storage.users().find_by_email(&input.email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "A user with email {} already exists",
            input.email.trim()
        ))));
    }
    let user = state.storage.users().create(&input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.storage.users().list().await?;
    Ok(Json(users))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = state
        .storage
        .users()
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    Ok(Json(user))
}

/// PUT /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    reject_blank("username", input.username.as_deref())?;
    reject_blank("email", input.email.as_deref())?;
    let user = state
        .storage
        .users()
        .update(id, &input)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    Ok(Json(user))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if state.storage.users().delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("User", id))
    }
}
