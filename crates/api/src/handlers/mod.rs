//! HTTP handlers, one module per resource.

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

use crate::error::{AppError, AppResult};

/// Reject a required text field that is empty or only whitespace.
pub(crate) fn require_non_blank(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be blank")));
    }
    Ok(())
}

/// Like [`require_non_blank`] for optional update fields: absent is fine.
pub(crate) fn reject_blank(field: &str, value: Option<&str>) -> AppResult<()> {
    match value {
        Some(v) => require_non_blank(field, v),
        None => Ok(()),
    }
}

/// Reject a count below zero; absent is fine.
pub(crate) fn reject_negative(field: &str, value: Option<i64>) -> AppResult<()> {
    match value {
        Some(v) if v < 0 => Err(AppError::BadRequest(format!("{field} must not be negative"))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(require_non_blank("title", "Pantry").is_ok());
        assert_matches!(require_non_blank("title", "  "), Err(AppError::BadRequest(msg)) if msg == "title must not be blank");
        assert!(reject_blank("title", None).is_ok());
        assert!(reject_blank("title", Some("")).is_err());
    }

    #[test]
    fn negative_counts_are_rejected() {
        assert!(reject_negative("count", None).is_ok());
        assert!(reject_negative("count", Some(0)).is_ok());
        assert_matches!(reject_negative("count", Some(-1)), Err(AppError::BadRequest(msg)) if msg == "count must not be negative");
    }
}
