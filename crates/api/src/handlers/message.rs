//! Handlers for the `/messages` resource, including threads.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use vhub_core::types::DbId;
use vhub_db::models::message::{CreateMessage, Message, UpdateMessage};

use super::{reject_blank, require_non_blank};
use crate::error::{AppError, AppResult};
use crate::query::MessageListParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn validate(input: &CreateMessage) -> AppResult<()> {
    require_non_blank("sender", &input.sender)?;
    require_non_blank("content", &input.content)
}

/// POST /api/v1/messages
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMessage>,
) -> AppResult<(StatusCode, Json<Message>)> {
    validate(&input)?;
    let message = state.storage.messages().create(&input).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// POST /api/v1/messages/{id}/replies
pub async fn create_reply(
    State(state): State<AppState>,
    Path(parent_id): Path<DbId>,
    Json(input): Json<CreateMessage>,
) -> AppResult<(StatusCode, Json<Message>)> {
    validate(&input)?;
    let reply = state
        .storage
        .messages()
        .create_reply(parent_id, &input)
        .await?
        .ok_or(AppError::not_found("Message", parent_id))?;
    Ok((StatusCode::CREATED, Json(reply)))
}

/// GET /api/v1/messages?committee=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MessageListParams>,
) -> AppResult<Json<Vec<Message>>> {
    let messages = match params.committee.as_deref() {
        Some(committee) => state.storage.messages().list_by_committee(committee).await?,
        None => state.storage.messages().list().await?,
    };
    Ok(Json(messages))
}

/// GET /api/v1/messages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Message>> {
    let message = state
        .storage
        .messages()
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found("Message", id))?;
    Ok(Json(message))
}

/// GET /api/v1/messages/{id}/thread
///
/// The whole thread `id` belongs to, root first.
pub async fn thread(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Message>>>> {
    let message = state
        .storage
        .messages()
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found("Message", id))?;
    let thread = state.storage.messages().list_thread(message.thread_id).await?;
    Ok(Json(DataResponse { data: thread }))
}

/// PUT /api/v1/messages/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMessage>,
) -> AppResult<Json<Message>> {
    reject_blank("content", input.content.as_deref())?;
    let message = state
        .storage
        .messages()
        .update(id, &input)
        .await?
        .ok_or(AppError::not_found("Message", id))?;
    Ok(Json(message))
}

/// DELETE /api/v1/messages/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if state.storage.messages().delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Message", id))
    }
}
