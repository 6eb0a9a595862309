//! Per-user task completion marks (`TaskCompletions` tab).

use serde::{Deserialize, Serialize};
use vhub_core::types::{DbId, Timestamp};

use crate::codec::{encode_timestamp, RowCodec, RowReader};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCompletion {
    pub id: DbId,
    pub task_id: DbId,
    pub user_id: DbId,
    pub completed_at: Timestamp,
}

/// DTO for marking a task done. `task_id` comes from the route.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskCompletion {
    pub user_id: DbId,
}

impl RowCodec for TaskCompletion {
    const SHEET: &'static str = "TaskCompletions";
    const ENTITY: &'static str = "TaskCompletion";
    const COLUMNS: &'static [&'static str] = &["id", "taskId", "userId", "completedAt"];

    fn id(&self) -> DbId {
        self.id
    }

    fn encode(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.task_id.to_string(),
            self.user_id.to_string(),
            encode_timestamp(&self.completed_at),
        ]
    }

    fn decode(row: &mut RowReader<'_>) -> Self {
        Self {
            id: row.int("id"),
            task_id: row.int("taskId"),
            user_id: row.int("userId"),
            completed_at: row.timestamp("completedAt"),
        }
    }
}
