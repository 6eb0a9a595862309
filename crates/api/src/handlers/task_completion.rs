//! Handlers for completions nested under `/tasks/{task_id}/completions`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vhub_core::types::DbId;
use vhub_db::models::task_completion::{CreateTaskCompletion, TaskCompletion};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/tasks/{task_id}/completions
///
/// Marking a task that the user already completed returns the existing mark.
pub async fn create(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<CreateTaskCompletion>,
) -> AppResult<(StatusCode, Json<TaskCompletion>)> {
    state
        .storage
        .project_tasks()
        .find_by_id(task_id)
        .await?
        .ok_or(AppError::not_found("ProjectTask", task_id))?;
    let completion = state
        .storage
        .task_completions()
        .create(task_id, &input)
        .await?;
    Ok((StatusCode::CREATED, Json(completion)))
}

/// GET /api/v1/tasks/{task_id}/completions
pub async fn list_by_task(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<Json<Vec<TaskCompletion>>> {
    let completions = state.storage.task_completions().list_by_task(task_id).await?;
    Ok(Json(completions))
}

/// GET /api/v1/tasks/{task_id}/completions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((task_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<TaskCompletion>> {
    let completion = state
        .storage
        .task_completions()
        .find_by_id(id)
        .await?
        .filter(|c| c.task_id == task_id)
        .ok_or(AppError::not_found("TaskCompletion", id))?;
    Ok(Json(completion))
}

/// DELETE /api/v1/tasks/{task_id}/completions/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((task_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let completions = state.storage.task_completions();
    let belongs = completions
        .find_by_id(id)
        .await?
        .is_some_and(|c| c.task_id == task_id);
    if belongs && completions.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("TaskCompletion", id))
    }
}

/// DELETE /api/v1/tasks/{task_id}/completions/users/{user_id}
///
/// 404 when the user has no completion on the task; the reported id is the
/// user's.
pub async fn delete_for_user(
    State(state): State<AppState>,
    Path((task_id, user_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if state
        .storage
        .task_completions()
        .delete_for_user(task_id, user_id)
        .await?
    {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("TaskCompletion", user_id))
    }
}
