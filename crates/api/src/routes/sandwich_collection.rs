//! Route definitions for the `/sandwich-collections` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sandwich_collection;
use crate::state::AppState;

/// Routes mounted at `/sandwich-collections`.
///
/// ```text
/// GET    /          -> list (optional ?host=&limit=&offset=)
/// POST   /          -> create
/// GET    /stats     -> stats
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(sandwich_collection::list).post(sandwich_collection::create),
        )
        .route("/stats", get(sandwich_collection::stats))
        .route(
            "/{id}",
            get(sandwich_collection::get_by_id)
                .put(sandwich_collection::update)
                .delete(sandwich_collection::delete),
        )
}
