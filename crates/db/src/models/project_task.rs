//! Tasks inside a project (`ProjectTasks` tab).

use serde::{Deserialize, Serialize};
use vhub_core::types::{DbId, Timestamp};

use crate::codec::{encode_int, encode_opt_int, encode_timestamp, RowCodec, RowReader};

/// Status given to tasks created without one.
pub const DEFAULT_TASK_STATUS: &str = "pending";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTask {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    pub status: String,
    /// Position within the project's task list, ascending.
    #[serde(rename = "order")]
    pub sort_order: i64,
    pub assignee_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a task. `project_id` comes from the route.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectTask {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    /// Appended after the project's last task if omitted.
    #[serde(rename = "order")]
    pub sort_order: Option<i64>,
    pub assignee_id: Option<DbId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i64>,
    pub assignee_id: Option<DbId>,
}

impl RowCodec for ProjectTask {
    const SHEET: &'static str = "ProjectTasks";
    const ENTITY: &'static str = "ProjectTask";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "projectId",
        "title",
        "description",
        "status",
        "order",
        "assigneeId",
        "createdAt",
        "updatedAt",
    ];

    fn id(&self) -> DbId {
        self.id
    }

    fn encode(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.project_id.to_string(),
            self.title.clone(),
            self.description.clone(),
            self.status.clone(),
            encode_int(self.sort_order),
            encode_opt_int(self.assignee_id),
            encode_timestamp(&self.created_at),
            encode_timestamp(&self.updated_at),
        ]
    }

    fn decode(row: &mut RowReader<'_>) -> Self {
        Self {
            id: row.int("id"),
            project_id: row.int("projectId"),
            title: row.text("title"),
            description: row.text("description"),
            status: row
                .opt_text("status")
                .unwrap_or_else(|| DEFAULT_TASK_STATUS.to_string()),
            sort_order: row.int("order"),
            assignee_id: row.opt_int("assigneeId"),
            created_at: row.timestamp("createdAt"),
            updated_at: row.timestamp("updatedAt"),
        }
    }
}
