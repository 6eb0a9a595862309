//! Entity records, their create/update DTOs and row codecs.

pub mod drive_link;
pub mod meeting_minutes;
pub mod message;
pub mod project;
pub mod project_comment;
pub mod project_task;
pub mod sandwich_collection;
pub mod task_completion;
pub mod user;
pub mod weekly_report;

/// Turn a JSON value received over the API into cell text: strings are kept
/// verbatim, anything else is stored as compact JSON.
pub fn blob_from_value(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
