//! Weekly report records (`WeeklyReports` tab).

use serde::{Deserialize, Serialize};
use vhub_core::types::{DbId, Timestamp};

use crate::codec::{encode_int, encode_timestamp, RowCodec, RowReader};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub id: DbId,
    /// Date the reported week ends, as entered (`YYYY-MM-DD`).
    pub week_ending: String,
    pub sandwich_count: i64,
    pub notes: String,
    pub submitted_by: String,
    pub submitted_at: Timestamp,
}

/// DTO for submitting a weekly report.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWeeklyReport {
    pub week_ending: String,
    pub sandwich_count: i64,
    pub notes: Option<String>,
    pub submitted_by: String,
}

/// DTO for correcting a weekly report. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWeeklyReport {
    pub week_ending: Option<String>,
    pub sandwich_count: Option<i64>,
    pub notes: Option<String>,
    pub submitted_by: Option<String>,
}

impl RowCodec for WeeklyReport {
    const SHEET: &'static str = "WeeklyReports";
    const ENTITY: &'static str = "WeeklyReport";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "weekEnding",
        "sandwichCount",
        "notes",
        "submittedBy",
        "submittedAt",
    ];

    fn id(&self) -> DbId {
        self.id
    }

    fn encode(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.week_ending.clone(),
            encode_int(self.sandwich_count),
            self.notes.clone(),
            self.submitted_by.clone(),
            encode_timestamp(&self.submitted_at),
        ]
    }

    fn decode(row: &mut RowReader<'_>) -> Self {
        Self {
            id: row.int("id"),
            week_ending: row.text("weekEnding"),
            sandwich_count: row.int("sandwichCount"),
            notes: row.text("notes"),
            submitted_by: row.text("submittedBy"),
            submitted_at: row.timestamp("submittedAt"),
        }
    }
}
