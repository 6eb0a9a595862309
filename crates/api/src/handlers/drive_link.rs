//! Handlers for the `/drive-links` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vhub_core::types::DbId;
use vhub_db::models::drive_link::{CreateDriveLink, DriveLink, UpdateDriveLink};

use super::{reject_blank, require_non_blank};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/drive-links
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDriveLink>,
) -> AppResult<(StatusCode, Json<DriveLink>)> {
    require_non_blank("title", &input.title)?;
    require_non_blank("url", &input.url)?;
    let link = state.storage.drive_links().create(&input).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// GET /api/v1/drive-links
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<DriveLink>>> {
    let links = state.storage.drive_links().list().await?;
    Ok(Json(links))
}

/// GET /api/v1/drive-links/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DriveLink>> {
    let link = state
        .storage
        .drive_links()
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found("DriveLink", id))?;
    Ok(Json(link))
}

/// PUT /api/v1/drive-links/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDriveLink>,
) -> AppResult<Json<DriveLink>> {
    reject_blank("title", input.title.as_deref())?;
    reject_blank("url", input.url.as_deref())?;
    let link = state
        .storage
        .drive_links()
        .update(id, &input)
        .await?
        .ok_or(AppError::not_found("DriveLink", id))?;
    Ok(Json(link))
}

/// DELETE /api/v1/drive-links/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if state.storage.drive_links().delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("DriveLink", id))
    }
}
