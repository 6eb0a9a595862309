//! Repository for the `ProjectTasks` tab.

use chrono::Utc;
use vhub_core::types::DbId;

use super::{apply, SheetRepo};
use crate::error::StoreError;
use crate::models::project_task::{
    CreateProjectTask, ProjectTask, UpdateProjectTask, DEFAULT_TASK_STATUS,
};

pub struct ProjectTaskRepo {
    inner: SheetRepo<ProjectTask>,
}

impl ProjectTaskRepo {
    pub fn new(inner: SheetRepo<ProjectTask>) -> Self {
        Self { inner }
    }

    /// Add a task to `project_id`. Without an explicit order it goes after
    /// the project's last task.
    ///
    /// The project itself is not checked for existence here.
    pub async fn create(
        &self,
        project_id: DbId,
        input: &CreateProjectTask,
    ) -> Result<ProjectTask, StoreError> {
        let sort_order = match input.sort_order {
            Some(order) => order,
            None => self
                .list_by_project(project_id)
                .await?
                .iter()
                .map(|t| t.sort_order)
                .max()
                .map_or(0, |max| max + 1),
        };
        let now = Utc::now();

        self.inner
            .create(|id| ProjectTask {
                id,
                project_id,
                title: input.title.clone(),
                description: input.description.clone().unwrap_or_default(),
                status: input
                    .status
                    .clone()
                    .unwrap_or_else(|| DEFAULT_TASK_STATUS.to_string()),
                sort_order,
                assignee_id: input.assignee_id,
                created_at: now,
                updated_at: now,
            })
            .await
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Option<ProjectTask>, StoreError> {
        self.inner.find_by_id(id).await
    }

    /// Tasks of one project ordered by position, then id.
    pub async fn list_by_project(&self, project_id: DbId) -> Result<Vec<ProjectTask>, StoreError> {
        let mut tasks = self
            .inner
            .list_where(|t| t.project_id == project_id)
            .await?;
        tasks.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then(a.id.cmp(&b.id)));
        Ok(tasks)
    }

    pub async fn update(
        &self,
        id: DbId,
        input: &UpdateProjectTask,
    ) -> Result<Option<ProjectTask>, StoreError> {
        let now = Utc::now();
        self.inner
            .update(id, |task| {
                apply(&mut task.title, &input.title);
                apply(&mut task.description, &input.description);
                apply(&mut task.status, &input.status);
                apply(&mut task.sort_order, &input.sort_order);
                if input.assignee_id.is_some() {
                    task.assignee_id = input.assignee_id;
                }
                task.updated_at = now;
            })
            .await
    }

    pub async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        self.inner.delete(id).await
    }
}
