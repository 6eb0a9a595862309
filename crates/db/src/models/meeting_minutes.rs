//! Meeting minutes (`MeetingMinutes` tab).

use serde::{Deserialize, Serialize};
use vhub_core::types::DbId;

use crate::codec::{RowCodec, RowReader};

pub const DEFAULT_MINUTES_COLOR: &str = "blue";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingMinutes {
    pub id: DbId,
    pub title: String,
    pub date: String,
    pub summary: String,
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetingMinutes {
    pub title: String,
    pub date: String,
    pub summary: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeetingMinutes {
    pub title: Option<String>,
    pub date: Option<String>,
    pub summary: Option<String>,
    pub color: Option<String>,
}

impl RowCodec for MeetingMinutes {
    const SHEET: &'static str = "MeetingMinutes";
    const ENTITY: &'static str = "MeetingMinutes";
    const COLUMNS: &'static [&'static str] = &["id", "title", "date", "summary", "color"];

    fn id(&self) -> DbId {
        self.id
    }

    fn encode(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.date.clone(),
            self.summary.clone(),
            self.color.clone(),
        ]
    }

    fn decode(row: &mut RowReader<'_>) -> Self {
        Self {
            id: row.int("id"),
            title: row.text("title"),
            date: row.text("date"),
            summary: row.text("summary"),
            color: row.text("color"),
        }
    }
}
