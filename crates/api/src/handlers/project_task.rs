//! Handlers for tasks nested under `/projects/{project_id}/tasks`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vhub_core::types::DbId;
use vhub_db::models::project_task::{CreateProjectTask, ProjectTask, UpdateProjectTask};

use super::{reject_blank, require_non_blank};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

async fn ensure_project(state: &AppState, project_id: DbId) -> AppResult<()> {
    state
        .storage
        .projects()
        .find_by_id(project_id)
        .await?
        .ok_or(AppError::not_found("Project", project_id))?;
    Ok(())
}

/// Load a task and check it belongs to `project_id`.
async fn find_scoped(state: &AppState, project_id: DbId, id: DbId) -> AppResult<ProjectTask> {
    state
        .storage
        .project_tasks()
        .find_by_id(id)
        .await?
        .filter(|t| t.project_id == project_id)
        .ok_or(AppError::not_found("ProjectTask", id))
}

/// POST /api/v1/projects/{project_id}/tasks
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateProjectTask>,
) -> AppResult<(StatusCode, Json<ProjectTask>)> {
    require_non_blank("title", &input.title)?;
    ensure_project(&state, project_id).await?;
    let task = state.storage.project_tasks().create(project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/projects/{project_id}/tasks
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ProjectTask>>> {
    let tasks = state.storage.project_tasks().list_by_project(project_id).await?;
    Ok(Json(tasks))
}

/// GET /api/v1/projects/{project_id}/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<ProjectTask>> {
    Ok(Json(find_scoped(&state, project_id, id).await?))
}

/// PUT /api/v1/projects/{project_id}/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateProjectTask>,
) -> AppResult<Json<ProjectTask>> {
    reject_blank("title", input.title.as_deref())?;
    find_scoped(&state, project_id, id).await?;
    let task = state
        .storage
        .project_tasks()
        .update(id, &input)
        .await?
        .ok_or(AppError::not_found("ProjectTask", id))?;
    Ok(Json(task))
}

/// DELETE /api/v1/projects/{project_id}/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    find_scoped(&state, project_id, id).await?;
    if state.storage.project_tasks().delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("ProjectTask", id))
    }
}
