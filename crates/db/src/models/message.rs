//! Message records (`Messages` tab).
//!
//! Threads share a `threadId`: a root message's thread id is its own id and
//! every reply inherits the root's. `replyCount` is only maintained on roots.

use serde::{Deserialize, Serialize};
use vhub_core::types::{DbId, Timestamp};

use crate::codec::{encode_opt_int, encode_timestamp, RowCodec, RowReader};

/// Committee used when a message is posted without one.
pub const DEFAULT_COMMITTEE: &str = "general";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: DbId,
    pub sender: String,
    pub content: String,
    pub timestamp: Timestamp,
    pub parent_id: Option<DbId>,
    pub thread_id: DbId,
    pub reply_count: i64,
    pub committee: String,
}

impl Message {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// DTO for posting a message or a reply.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessage {
    pub sender: String,
    pub content: String,
    /// Defaults to [`DEFAULT_COMMITTEE`]; replies default to the parent's.
    pub committee: Option<String>,
}

/// DTO for editing a message. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessage {
    pub content: Option<String>,
    pub committee: Option<String>,
}

impl RowCodec for Message {
    const SHEET: &'static str = "Messages";
    const ENTITY: &'static str = "Message";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "sender",
        "content",
        "timestamp",
        "parentId",
        "threadId",
        "replyCount",
        "committee",
    ];

    fn id(&self) -> DbId {
        self.id
    }

    fn encode(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.sender.clone(),
            self.content.clone(),
            encode_timestamp(&self.timestamp),
            encode_opt_int(self.parent_id),
            self.thread_id.to_string(),
            self.reply_count.to_string(),
            self.committee.clone(),
        ]
    }

    fn decode(row: &mut RowReader<'_>) -> Self {
        let id = row.int("id");
        Self {
            id,
            sender: row.text("sender"),
            content: row.text("content"),
            timestamp: row.timestamp("timestamp"),
            parent_id: row.opt_int("parentId"),
            // Rows written before threading existed have no thread id.
            thread_id: row.opt_int("threadId").filter(|t| *t > 0).unwrap_or(id),
            reply_count: row.int("replyCount"),
            committee: row
                .opt_text("committee")
                .unwrap_or_else(|| DEFAULT_COMMITTEE.to_string()),
        }
    }
}
