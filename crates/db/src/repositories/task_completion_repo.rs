//! Repository for the `TaskCompletions` tab.

use chrono::Utc;
use vhub_core::types::DbId;

use super::SheetRepo;
use crate::error::StoreError;
use crate::models::task_completion::{CreateTaskCompletion, TaskCompletion};

pub struct TaskCompletionRepo {
    inner: SheetRepo<TaskCompletion>,
}

impl TaskCompletionRepo {
    pub fn new(inner: SheetRepo<TaskCompletion>) -> Self {
        Self { inner }
    }

    /// Mark `task_id` done for a user.
    ///
    /// A user has at most one live completion per task: marking it again
    /// returns the existing mark.
    pub async fn create(
        &self,
        task_id: DbId,
        input: &CreateTaskCompletion,
    ) -> Result<TaskCompletion, StoreError> {
        let user_id = input.user_id;
        let now = Utc::now();
        self.inner
            .create_unless(
                |c| c.task_id == task_id && c.user_id == user_id,
                |id| TaskCompletion {
                    id,
                    task_id,
                    user_id,
                    completed_at: now,
                },
            )
            .await
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Option<TaskCompletion>, StoreError> {
        self.inner.find_by_id(id).await
    }

    async fn find_for_user(
        &self,
        task_id: DbId,
        user_id: DbId,
    ) -> Result<Option<TaskCompletion>, StoreError> {
        Ok(self
            .list_by_task(task_id)
            .await?
            .into_iter()
            .find(|c| c.user_id == user_id))
    }

    pub async fn list_by_task(&self, task_id: DbId) -> Result<Vec<TaskCompletion>, StoreError> {
        self.inner.list_where(|c| c.task_id == task_id).await
    }

    pub async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        self.inner.delete(id).await
    }

    /// Remove a user's mark on a task. Returns `false` if there was none.
    pub async fn delete_for_user(&self, task_id: DbId, user_id: DbId) -> Result<bool, StoreError> {
        match self.find_for_user(task_id, user_id).await? {
            Some(completion) => self.inner.delete(completion.id).await,
            None => Ok(false),
        }
    }
}
