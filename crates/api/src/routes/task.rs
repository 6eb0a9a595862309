//! Route definitions for task-scoped resources under `/tasks`.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::task_completion;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /{task_id}/completions                   -> list_by_task
/// POST   /{task_id}/completions                   -> create
/// GET    /{task_id}/completions/{id}              -> get_by_id
/// DELETE /{task_id}/completions/{id}              -> delete
/// DELETE /{task_id}/completions/users/{user_id}   -> delete_for_user
/// ```
pub fn router() -> Router<AppState> {
    let completion_routes = Router::new()
        .route(
            "/",
            get(task_completion::list_by_task).post(task_completion::create),
        )
        .route(
            "/{id}",
            get(task_completion::get_by_id).delete(task_completion::delete),
        )
        .route("/users/{user_id}", delete(task_completion::delete_for_user));

    Router::new().nest("/{task_id}/completions", completion_routes)
}
