pub mod drive_link;
pub mod health;
pub mod meeting_minutes;
pub mod message;
pub mod project;
pub mod sandwich_collection;
pub mod task;
pub mod user;
pub mod weekly_report;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /users                                   user CRUD
/// /projects                                project CRUD, restore
/// /projects/{project_id}/tasks             tasks of a project
/// /projects/{project_id}/comments          comments on a project
/// /tasks/{task_id}/completions             completion marks of a task
/// /messages                                messages, replies, threads
/// /weekly-reports                          weekly report CRUD
/// /sandwich-collections                    collection log, paging, stats
/// /meeting-minutes                         meeting minutes CRUD
/// /drive-links                             drive link CRUD
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user::router())
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
        .nest("/messages", message::router())
        .nest("/weekly-reports", weekly_report::router())
        .nest("/sandwich-collections", sandwich_collection::router())
        .nest("/meeting-minutes", meeting_minutes::router())
        .nest("/drive-links", drive_link::router())
}
