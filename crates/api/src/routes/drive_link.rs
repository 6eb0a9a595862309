//! Route definitions for the `/drive-links` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::drive_link;
use crate::state::AppState;

/// Routes mounted at `/drive-links`.
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
        .route("/", get(drive_link::list).post(drive_link::create))
        .route(
            "/{id}",
            get(drive_link::get_by_id)
                .put(drive_link::update)
                .delete(drive_link::delete),
        )
}
