//! User records (`Users` tab).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use vhub_core::types::{DbId, Timestamp};

use crate::codec::{encode_json, encode_timestamp, RowCodec, RowReader};

/// Role given to users created without one.
pub const DEFAULT_ROLE: &str = "volunteer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
    /// Stored as a JSON array in one cell.
    pub permissions: Vec<String>,
    /// Stored as a JSON object in one cell.
    pub metadata: Map<String, Value>,
    pub created_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    /// Defaults to [`DEFAULT_ROLE`].
    pub role: Option<String>,
    pub permissions: Option<Vec<String>>,
    pub metadata: Option<Map<String, Value>>,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub permissions: Option<Vec<String>>,
    pub metadata: Option<Map<String, Value>>,
}

impl RowCodec for User {
    const SHEET: &'static str = "Users";
    const ENTITY: &'static str = "User";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "username",
        "email",
        "fullName",
        "role",
        "permissions",
        "metadata",
        "createdAt",
    ];

    fn id(&self) -> DbId {
        self.id
    }

    fn encode(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.username.clone(),
            self.email.clone(),
            self.full_name.clone(),
            self.role.clone(),
            encode_json(&self.permissions),
            encode_json(&self.metadata),
            encode_timestamp(&self.created_at),
        ]
    }

    fn decode(row: &mut RowReader<'_>) -> Self {
        Self {
            id: row.int("id"),
            username: row.text("username"),
            email: row.text("email"),
            full_name: row.text("fullName"),
            role: row.opt_text("role").unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            permissions: row.json("permissions"),
            metadata: row.json("metadata"),
            created_at: row.timestamp("createdAt"),
        }
    }
}
