//! Route definitions for the `/projects` resource.
//!
//! Also nests task and comment routes under `/projects/{project_id}/...`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{project, project_comment, project_task};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                               -> list
/// POST   /                               -> create
/// GET    /{id}                           -> get_by_id
/// PUT    /{id}                           -> update
/// DELETE /{id}                           -> delete
/// POST   /{id}/restore                   -> restore
///
/// GET    /{project_id}/tasks             -> list_by_project
/// POST   /{project_id}/tasks             -> create
/// GET    /{project_id}/tasks/{id}        -> get_by_id
/// PUT    /{project_id}/tasks/{id}        -> update
/// DELETE /{project_id}/tasks/{id}        -> delete
///
/// GET    /{project_id}/comments          -> list_by_project
/// POST   /{project_id}/comments          -> create
/// GET    /{project_id}/comments/{id}     -> get_by_id
/// PUT    /{project_id}/comments/{id}     -> update
/// DELETE /{project_id}/comments/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    let task_routes = Router::new()
        .route(
            "/",
            get(project_task::list_by_project).post(project_task::create),
        )
        .route(
            "/{id}",
            get(project_task::get_by_id)
                .put(project_task::update)
                .delete(project_task::delete),
        );

    let comment_routes = Router::new()
        .route(
            "/",
            get(project_comment::list_by_project).post(project_comment::create),
        )
        .route(
            "/{id}",
            get(project_comment::get_by_id)
                .put(project_comment::update)
                .delete(project_comment::delete),
        );

    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/restore", post(project::restore))
        .nest("/{project_id}/tasks", task_routes)
        .nest("/{project_id}/comments", comment_routes)
}
