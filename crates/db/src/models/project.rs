//! Project records (`Projects` tab).

use serde::{Deserialize, Serialize};
use vhub_core::project_status::ProjectStatus;
use vhub_core::types::DbId;

use crate::codec::{encode_opt_int, encode_opt_text, RowCodec, RowReader};

/// Card color for projects created without one.
pub const DEFAULT_COLOR: &str = "blue";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub assignee_id: Option<DbId>,
    pub assignee_name: Option<String>,
    pub color: String,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub title: String,
    pub description: Option<String>,
    /// Derived from the assignee if omitted.
    pub status: Option<ProjectStatus>,
    pub assignee_id: Option<DbId>,
    pub assignee_name: Option<String>,
    pub color: Option<String>,
}

/// DTO for updating an existing project. All fields are optional.
///
/// An empty `assigneeName` clears the assignee.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub assignee_id: Option<DbId>,
    pub assignee_name: Option<String>,
    pub color: Option<String>,
}

impl RowCodec for Project {
    const SHEET: &'static str = "Projects";
    const ENTITY: &'static str = "Project";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "title",
        "description",
        "status",
        "assigneeId",
        "assigneeName",
        "color",
    ];

    fn id(&self) -> DbId {
        self.id
    }

    fn encode(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.description.clone(),
            self.status.to_string(),
            encode_opt_int(self.assignee_id),
            encode_opt_text(self.assignee_name.as_deref()),
            self.color.clone(),
        ]
    }

    fn decode(row: &mut RowReader<'_>) -> Self {
        Self {
            id: row.int("id"),
            title: row.text("title"),
            description: row.text("description"),
            status: row.parsed("status"),
            assignee_id: row.opt_int("assigneeId"),
            assignee_name: row.opt_text("assigneeName"),
            color: row
                .opt_text("color")
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        }
    }
}
