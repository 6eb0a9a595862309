//! Sandwich collection log entries (`SandwichCollections` tab).
//!
//! Ids are persisted in column A like every other tab, so an entry keeps its
//! id when rows above it are deleted.

use serde::{Deserialize, Serialize};
use vhub_core::types::{DbId, Timestamp};

use crate::codec::{encode_int, encode_timestamp, RowCodec, RowReader};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SandwichCollection {
    pub id: DbId,
    /// Date of the collection, as entered (`YYYY-MM-DD`).
    pub collection_date: String,
    pub host_name: String,
    pub individual_sandwiches: i64,
    /// Opaque text/JSON blob describing group contributions.
    pub group_collections: String,
    pub submitted_at: Timestamp,
}

/// DTO for logging a collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSandwichCollection {
    pub collection_date: String,
    pub host_name: String,
    #[serde(default)]
    pub individual_sandwiches: i64,
    /// Either a JSON string or any JSON value, stored as text.
    pub group_collections: Option<serde_json::Value>,
}

/// DTO for correcting a collection entry. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSandwichCollection {
    pub collection_date: Option<String>,
    pub host_name: Option<String>,
    pub individual_sandwiches: Option<i64>,
    pub group_collections: Option<serde_json::Value>,
}

impl RowCodec for SandwichCollection {
    const SHEET: &'static str = "SandwichCollections";
    const ENTITY: &'static str = "SandwichCollection";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "collectionDate",
        "hostName",
        "individualSandwiches",
        "groupCollections",
        "submittedAt",
    ];

    fn id(&self) -> DbId {
        self.id
    }

    fn encode(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.collection_date.clone(),
            self.host_name.clone(),
            encode_int(self.individual_sandwiches),
            self.group_collections.clone(),
            encode_timestamp(&self.submitted_at),
        ]
    }

    fn decode(row: &mut RowReader<'_>) -> Self {
        Self {
            id: row.int("id"),
            collection_date: row.text("collectionDate"),
            host_name: row.text("hostName"),
            individual_sandwiches: row.int("individualSandwiches"),
            group_collections: row.text("groupCollections"),
            submitted_at: row.timestamp("submittedAt"),
        }
    }
}
