//! Handlers for the `/weekly-reports` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vhub_core::types::DbId;
use vhub_db::models::weekly_report::{CreateWeeklyReport, UpdateWeeklyReport, WeeklyReport};

use super::{reject_negative, require_non_blank};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/weekly-reports
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateWeeklyReport>,
) -> AppResult<(StatusCode, Json<WeeklyReport>)> {
    require_non_blank("weekEnding", &input.week_ending)?;
    reject_negative("sandwichCount", Some(input.sandwich_count))?;
    let report = state.storage.weekly_reports().create(&input).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

/// GET /api/v1/weekly-reports
///
/// Latest week first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<WeeklyReport>>> {
    let reports = state.storage.weekly_reports().list_recent().await?;
    Ok(Json(reports))
}

/// GET /api/v1/weekly-reports/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<WeeklyReport>> {
    let report = state
        .storage
        .weekly_reports()
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found("WeeklyReport", id))?;
    Ok(Json(report))
}

/// PUT /api/v1/weekly-reports/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWeeklyReport>,
) -> AppResult<Json<WeeklyReport>> {
    reject_negative("sandwichCount", input.sandwich_count)?;
    let report = state
        .storage
        .weekly_reports()
        .update(id, &input)
        .await?
        .ok_or(AppError::not_found("WeeklyReport", id))?;
    Ok(Json(report))
}

/// DELETE /api/v1/weekly-reports/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if state.storage.weekly_reports().delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("WeeklyReport", id))
    }
}
