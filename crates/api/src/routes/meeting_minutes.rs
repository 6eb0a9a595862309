//! Route definitions for the `/meeting-minutes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::meeting_minutes;
use crate::state::AppState;

/// Routes mounted at `/meeting-minutes`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(meeting_minutes::list).post(meeting_minutes::create))
        .route(
            "/{id}",
            get(meeting_minutes::get_by_id)
                .put(meeting_minutes::update)
                .delete(meeting_minutes::delete),
        )
}
