//! Route definitions for the `/messages` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::message;
use crate::state::AppState;

/// Routes mounted at `/messages`.
///
/// ```text
/// GET    /                 -> list (optional ?committee=)
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// POST   /{id}/replies     -> create_reply
/// GET    /{id}/thread      -> thread
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(message::list).post(message::create))
        .route(
            "/{id}",
            get(message::get_by_id)
                .put(message::update)
                .delete(message::delete),
        )
        .route("/{id}/replies", post(message::create_reply))
        .route("/{id}/thread", get(message::thread))
}
