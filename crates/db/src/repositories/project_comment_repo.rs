//! Repository for the `ProjectComments` tab.

use chrono::Utc;
use vhub_core::types::DbId;

use super::{apply, SheetRepo};
use crate::error::StoreError;
use crate::models::project_comment::{
    CreateProjectComment, ProjectComment, UpdateProjectComment,
};

pub struct ProjectCommentRepo {
    inner: SheetRepo<ProjectComment>,
}

impl ProjectCommentRepo {
    pub fn new(inner: SheetRepo<ProjectComment>) -> Self {
        Self { inner }
    }

    pub async fn create(
        &self,
        project_id: DbId,
        input: &CreateProjectComment,
    ) -> Result<ProjectComment, StoreError> {
        let now = Utc::now();
        self.inner
            .create(|id| ProjectComment {
                id,
                project_id,
                user_id: input.user_id,
                content: input.content.clone(),
                created_at: now,
            })
            .await
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Option<ProjectComment>, StoreError> {
        self.inner.find_by_id(id).await
    }

    /// Comments on a project, oldest first.
    pub async fn list_by_project(
        &self,
        project_id: DbId,
    ) -> Result<Vec<ProjectComment>, StoreError> {
        let mut comments = self
            .inner
            .list_where(|c| c.project_id == project_id)
            .await?;
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(comments)
    }

    pub async fn update(
        &self,
        id: DbId,
        input: &UpdateProjectComment,
    ) -> Result<Option<ProjectComment>, StoreError> {
        self.inner
            .update(id, |comment| apply(&mut comment.content, &input.content))
            .await
    }

    pub async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        self.inner.delete(id).await
    }
}
