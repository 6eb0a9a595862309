//! Repository layer.
//!
//! One repository per entity tab. Each wraps a [`SheetRepo`] (the generic
//! scan / append / write-back machinery) and maps the entity's DTOs onto it.

pub mod drive_link_repo;
pub mod meeting_minutes_repo;
pub mod message_repo;
pub mod project_comment_repo;
pub mod project_repo;
pub mod project_task_repo;
pub mod sandwich_collection_repo;
pub mod sheet_repo;
pub mod task_completion_repo;
pub mod user_repo;
pub mod weekly_report_repo;

pub use drive_link_repo::DriveLinkRepo;
pub use meeting_minutes_repo::MeetingMinutesRepo;
pub use message_repo::MessageRepo;
pub use project_comment_repo::ProjectCommentRepo;
pub use project_repo::ProjectRepo;
pub use project_task_repo::ProjectTaskRepo;
pub use sandwich_collection_repo::SandwichCollectionRepo;
pub use sheet_repo::SheetRepo;
pub use task_completion_repo::TaskCompletionRepo;
pub use user_repo::UserRepo;
pub use weekly_report_repo::WeeklyReportRepo;

/// Overwrite `target` when the update carries a value for it.
pub(crate) fn apply<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *target = v.clone();
    }
}
