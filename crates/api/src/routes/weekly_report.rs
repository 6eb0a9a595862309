//! Route definitions for the `/weekly-reports` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::weekly_report;
use crate::state::AppState;

/// Routes mounted at `/weekly-reports`.
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
        .route("/", get(weekly_report::list).post(weekly_report::create))
        .route(
            "/{id}",
            get(weekly_report::get_by_id)
                .put(weekly_report::update)
                .delete(weekly_report::delete),
        )
}
