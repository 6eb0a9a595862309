//! Handlers for the `/sandwich-collections` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use vhub_core::collections::CollectionStats;
use vhub_core::types::DbId;
use vhub_db::models::sandwich_collection::{
    CreateSandwichCollection, SandwichCollection, UpdateSandwichCollection,
};

use super::{reject_negative, require_non_blank};
use crate::error::{AppError, AppResult};
use crate::query::CollectionListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/sandwich-collections
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSandwichCollection>,
) -> AppResult<(StatusCode, Json<SandwichCollection>)> {
    require_non_blank("collectionDate", &input.collection_date)?;
    require_non_blank("hostName", &input.host_name)?;
    reject_negative("individualSandwiches", Some(input.individual_sandwiches))?;
    let entry = state.storage.sandwich_collections().create(&input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/sandwich-collections?host=&limit=&offset=
///
/// With `host`, every entry for that host. With `limit` or `offset`, one
/// page, newest first. Otherwise every entry in sheet order.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CollectionListParams>,
) -> AppResult<Json<Vec<SandwichCollection>>> {
    let repo = state.storage.sandwich_collections();
    let entries = if let Some(host) = params.host.as_deref() {
        repo.list_by_host(host).await?
    } else if params.is_paged() {
        let page = params.page();
        repo.list_page(page.limit(), page.offset()).await?
    } else {
        repo.list().await?
    };
    Ok(Json(entries))
}

/// GET /api/v1/sandwich-collections/stats
pub async fn stats(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<CollectionStats>>> {
    let stats = state.storage.sandwich_collections().stats().await?;
    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/sandwich-collections/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SandwichCollection>> {
    let entry = state
        .storage
        .sandwich_collections()
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found("SandwichCollection", id))?;
    Ok(Json(entry))
}

/// PUT /api/v1/sandwich-collections/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSandwichCollection>,
) -> AppResult<Json<SandwichCollection>> {
    reject_negative("individualSandwiches", input.individual_sandwiches)?;
    let entry = state
        .storage
        .sandwich_collections()
        .update(id, &input)
        .await?
        .ok_or(AppError::not_found("SandwichCollection", id))?;
    Ok(Json(entry))
}

/// DELETE /api/v1/sandwich-collections/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if state.storage.sandwich_collections().delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("SandwichCollection", id))
    }
}
