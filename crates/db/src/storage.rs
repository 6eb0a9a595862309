//! The storage facade: one repository per entity over a shared client.

use std::sync::Arc;

use vhub_sheets::{SheetsClient, SpreadsheetMeta};

use crate::bootstrap::Bootstrap;
use crate::codec::{DecodePolicy, RowCodec};
use crate::error::StoreError;
use crate::models::{
    drive_link::DriveLink, meeting_minutes::MeetingMinutes, message::Message, project::Project,
    project_comment::ProjectComment, project_task::ProjectTask,
    sandwich_collection::SandwichCollection, task_completion::TaskCompletion, user::User,
    weekly_report::WeeklyReport,
};
use crate::repositories::{
    DriveLinkRepo, MeetingMinutesRepo, MessageRepo, ProjectCommentRepo, ProjectRepo,
    ProjectTaskRepo, SandwichCollectionRepo, SheetRepo, TaskCompletionRepo, UserRepo,
    WeeklyReportRepo,
};
use crate::sheet::SheetHandle;

/// Every entity store behind one value.
///
/// The client is injected, so the same facade runs against Google Sheets in
/// production and an in-memory workbook in tests. Worksheets are created
/// lazily on first access; [`Storage::ensure_worksheets`] forces it.
pub struct Storage {
    client: Arc<dyn SheetsClient>,
    bootstrap: Arc<Bootstrap>,
    users: UserRepo,
    projects: ProjectRepo,
    messages: MessageRepo,
    weekly_reports: WeeklyReportRepo,
    sandwich_collections: SandwichCollectionRepo,
    meeting_minutes: MeetingMinutesRepo,
    drive_links: DriveLinkRepo,
    project_tasks: ProjectTaskRepo,
    task_completions: TaskCompletionRepo,
    project_comments: ProjectCommentRepo,
}

impl Storage {
    pub fn new(client: Arc<dyn SheetsClient>, policy: DecodePolicy) -> Self {
        let layouts = vec![
            SheetRepo::<User>::layout(),
            SheetRepo::<Project>::layout(),
            SheetRepo::<Message>::layout(),
            SheetRepo::<WeeklyReport>::layout(),
            SheetRepo::<SandwichCollection>::layout(),
            SheetRepo::<MeetingMinutes>::layout(),
            SheetRepo::<DriveLink>::layout(),
            SheetRepo::<ProjectTask>::layout(),
            SheetRepo::<TaskCompletion>::layout(),
            SheetRepo::<ProjectComment>::layout(),
        ];
        let bootstrap = Arc::new(Bootstrap::new(Arc::clone(&client), layouts));

        Self {
            users: UserRepo::new(repo(&client, &bootstrap, policy)),
            projects: ProjectRepo::new(repo(&client, &bootstrap, policy)),
            messages: MessageRepo::new(repo(&client, &bootstrap, policy)),
            weekly_reports: WeeklyReportRepo::new(repo(&client, &bootstrap, policy)),
            sandwich_collections: SandwichCollectionRepo::new(repo(&client, &bootstrap, policy)),
            meeting_minutes: MeetingMinutesRepo::new(repo(&client, &bootstrap, policy)),
            drive_links: DriveLinkRepo::new(repo(&client, &bootstrap, policy)),
            project_tasks: ProjectTaskRepo::new(repo(&client, &bootstrap, policy)),
            task_completions: TaskCompletionRepo::new(repo(&client, &bootstrap, policy)),
            project_comments: ProjectCommentRepo::new(repo(&client, &bootstrap, policy)),
            client,
            bootstrap,
        }
    }

    pub fn users(&self) -> &UserRepo {
        &self.users
    }

    pub fn projects(&self) -> &ProjectRepo {
        &self.projects
    }

    pub fn messages(&self) -> &MessageRepo {
        &self.messages
    }

    pub fn weekly_reports(&self) -> &WeeklyReportRepo {
        &self.weekly_reports
    }

    pub fn sandwich_collections(&self) -> &SandwichCollectionRepo {
        &self.sandwich_collections
    }

    pub fn meeting_minutes(&self) -> &MeetingMinutesRepo {
        &self.meeting_minutes
    }

    pub fn drive_links(&self) -> &DriveLinkRepo {
        &self.drive_links
    }

    pub fn project_tasks(&self) -> &ProjectTaskRepo {
        &self.project_tasks
    }

    pub fn task_completions(&self) -> &TaskCompletionRepo {
        &self.task_completions
    }

    pub fn project_comments(&self) -> &ProjectCommentRepo {
        &self.project_comments
    }

    pub fn spreadsheet_id(&self) -> &str {
        self.client.spreadsheet_id()
    }

    /// Create any missing worksheets now. Returns the tabs created.
    pub async fn ensure_worksheets(&self) -> Result<Vec<String>, StoreError> {
        self.bootstrap.run().await
    }

    /// Fetch spreadsheet metadata to prove the backend is reachable.
    pub async fn health_check(&self) -> Result<SpreadsheetMeta, StoreError> {
        self.client
            .spreadsheet()
            .await
            .map_err(|e| StoreError::backend("health check", "", self.spreadsheet_id(), e))
    }
}

fn repo<T: RowCodec>(
    client: &Arc<dyn SheetsClient>,
    bootstrap: &Arc<Bootstrap>,
    policy: DecodePolicy,
) -> SheetRepo<T> {
    let sheet = SheetHandle::new(Arc::clone(client), SheetRepo::<T>::layout());
    SheetRepo::new(sheet, Arc::clone(bootstrap), policy)
}
