//! Shared drive links (`DriveLinks` tab).

use serde::{Deserialize, Serialize};
use vhub_core::types::DbId;

use crate::codec::{RowCodec, RowReader};

pub const DEFAULT_ICON: &str = "link";
pub const DEFAULT_ICON_COLOR: &str = "blue";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveLink {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub url: String,
    pub icon: String,
    pub icon_color: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriveLink {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub icon: Option<String>,
    pub icon_color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriveLink {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub icon_color: Option<String>,
}

impl RowCodec for DriveLink {
    const SHEET: &'static str = "DriveLinks";
    const ENTITY: &'static str = "DriveLink";
    const COLUMNS: &'static [&'static str] =
        &["id", "title", "description", "url", "icon", "iconColor"];

    fn id(&self) -> DbId {
        self.id
    }

    fn encode(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.description.clone(),
            self.url.clone(),
            self.icon.clone(),
            self.icon_color.clone(),
        ]
    }

    fn decode(row: &mut RowReader<'_>) -> Self {
        Self {
            id: row.int("id"),
            title: row.text("title"),
            description: row.text("description"),
            url: row.text("url"),
            icon: row.text("icon"),
            icon_color: row.text("iconColor"),
        }
    }
}
