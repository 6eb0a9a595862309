//! Handlers for comments nested under `/projects/{project_id}/comments`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vhub_core::types::DbId;
use vhub_db::models::project_comment::{
    CreateProjectComment, ProjectComment, UpdateProjectComment,
};

use super::{reject_blank, require_non_blank};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

async fn find_scoped(state: &AppState, project_id: DbId, id: DbId) -> AppResult<ProjectComment> {
    state
        .storage
        .project_comments()
        .find_by_id(id)
        .await?
        .filter(|c| c.project_id == project_id)
        .ok_or(AppError::not_found("ProjectComment", id))
}

/// POST /api/v1/projects/{project_id}/comments
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateProjectComment>,
) -> AppResult<(StatusCode, Json<ProjectComment>)> {
    require_non_blank("content", &input.content)?;
    state
        .storage
        .projects()
        .find_by_id(project_id)
        .await?
        .ok_or(AppError::not_found("Project", project_id))?;
    let comment = state
        .storage
        .project_comments()
        .create(project_id, &input)
        .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// GET /api/v1/projects/{project_id}/comments
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ProjectComment>>> {
    let comments = state
        .storage
        .project_comments()
        .list_by_project(project_id)
        .await?;
    Ok(Json(comments))
}

/// GET /api/v1/projects/{project_id}/comments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<ProjectComment>> {
    Ok(Json(find_scoped(&state, project_id, id).await?))
}

/// PUT /api/v1/projects/{project_id}/comments/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateProjectComment>,
) -> AppResult<Json<ProjectComment>> {
    reject_blank("content", input.content.as_deref())?;
    find_scoped(&state, project_id, id).await?;
    let comment = state
        .storage
        .project_comments()
        .update(id, &input)
        .await?
        .ok_or(AppError::not_found("ProjectComment", id))?;
    Ok(Json(comment))
}

/// DELETE /api/v1/projects/{project_id}/comments/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    find_scoped(&state, project_id, id).await?;
    if state.storage.project_comments().delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("ProjectComment", id))
    }
}
