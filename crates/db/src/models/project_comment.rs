//! Comments on a project (`ProjectComments` tab).

use serde::{Deserialize, Serialize};
use vhub_core::types::{DbId, Timestamp};

use crate::codec::{encode_timestamp, RowCodec, RowReader};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectComment {
    pub id: DbId,
    pub project_id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
}

/// DTO for commenting on a project. `project_id` comes from the route.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectComment {
    pub user_id: DbId,
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectComment {
    pub content: Option<String>,
}

impl RowCodec for ProjectComment {
    const SHEET: &'static str = "ProjectComments";
    const ENTITY: &'static str = "ProjectComment";
    const COLUMNS: &'static [&'static str] =
        &["id", "projectId", "userId", "content", "createdAt"];

    fn id(&self) -> DbId {
        self.id
    }

    fn encode(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.project_id.to_string(),
            self.user_id.to_string(),
            self.content.clone(),
            encode_timestamp(&self.created_at),
        ]
    }

    fn decode(row: &mut RowReader<'_>) -> Self {
        Self {
            id: row.int("id"),
            project_id: row.int("projectId"),
            user_id: row.int("userId"),
            content: row.text("content"),
            created_at: row.timestamp("createdAt"),
        }
    }
}
