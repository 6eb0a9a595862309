//! Handlers for the `/meeting-minutes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vhub_core::types::DbId;
use vhub_db::models::meeting_minutes::{
    CreateMeetingMinutes, MeetingMinutes, UpdateMeetingMinutes,
};

use super::{reject_blank, require_non_blank};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/meeting-minutes
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMeetingMinutes>,
) -> AppResult<(StatusCode, Json<MeetingMinutes>)> {
    require_non_blank("title", &input.title)?;
    let minutes = state.storage.meeting_minutes().create(&input).await?;
    Ok((StatusCode::CREATED, Json(minutes)))
}

/// GET /api/v1/meeting-minutes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MeetingMinutes>>> {
    let minutes = state.storage.meeting_minutes().list().await?;
    Ok(Json(minutes))
}

/// GET /api/v1/meeting-minutes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MeetingMinutes>> {
    let minutes = state
        .storage
        .meeting_minutes()
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found("MeetingMinutes", id))?;
    Ok(Json(minutes))
}

/// PUT /api/v1/meeting-minutes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMeetingMinutes>,
) -> AppResult<Json<MeetingMinutes>> {
    reject_blank("title", input.title.as_deref())?;
    let minutes = state
        .storage
        .meeting_minutes()
        .update(id, &input)
        .await?
        .ok_or(AppError::not_found("MeetingMinutes", id))?;
    Ok(Json(minutes))
}

/// DELETE /api/v1/meeting-minutes/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if state.storage.meeting_minutes().delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("MeetingMinutes", id))
    }
}
