//! Repository for the `Projects` tab.

use vhub_core::project_status::{derive_status, ProjectStatus};
use vhub_core::types::DbId;

use super::{apply, SheetRepo};
use crate::error::StoreError;
use crate::models::project::{CreateProject, Project, UpdateProject, DEFAULT_COLOR};

/// Provides CRUD operations for projects.
pub struct ProjectRepo {
    inner: SheetRepo<Project>,
}

/// Blank assignee names mean "nobody".
fn non_blank(name: &Option<String>) -> Option<String> {
    name.as_ref().filter(|n| !n.trim().is_empty()).cloned()
}

impl ProjectRepo {
    pub fn new(inner: SheetRepo<Project>) -> Self {
        Self { inner }
    }

    /// Insert a new project, returning it with its id.
    ///
    /// Without an explicit status, a project created with an assignee starts
    /// `in_progress`, otherwise `available`.
    pub async fn create(&self, input: &CreateProject) -> Result<Project, StoreError> {
        let status = derive_status(
            ProjectStatus::Available,
            input.status,
            input.assignee_name.as_deref(),
        );
        self.inner
            .create(|id| Project {
                id,
                title: input.title.clone(),
                description: input.description.clone().unwrap_or_default(),
                status,
                assignee_id: input.assignee_id,
                assignee_name: non_blank(&input.assignee_name),
                color: input
                    .color
                    .clone()
                    .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            })
            .await
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, StoreError> {
        self.inner.find_by_id(id).await
    }

    /// List all live projects in sheet order.
    pub async fn list(&self) -> Result<Vec<Project>, StoreError> {
        self.inner.list().await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Assigning someone to an `available` project moves it to
    /// `in_progress`; clearing the assignee of an `in_progress` project
    /// moves it back. Returns `None` if no live project has `id`.
    pub async fn update(
        &self,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, StoreError> {
        self.inner
            .update(id, |project| {
                project.status = derive_status(
                    project.status,
                    input.status,
                    input.assignee_name.as_deref(),
                );
                apply(&mut project.title, &input.title);
                apply(&mut project.description, &input.description);
                apply(&mut project.color, &input.color);

                if input.assignee_name.is_some() {
                    project.assignee_name = non_blank(&input.assignee_name);
                    if project.assignee_name.is_none() && input.assignee_id.is_none() {
                        project.assignee_id = None;
                    }
                }
                if input.assignee_id.is_some() {
                    project.assignee_id = input.assignee_id;
                }
            })
            .await
    }

    /// Soft-delete a project. Returns `true` if a live row was tombstoned.
    pub async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        self.inner.delete(id).await
    }

    /// Restore a deleted project. Returns `true` if a row was restored.
    pub async fn restore(&self, id: DbId) -> Result<bool, StoreError> {
        self.inner.restore(id).await
    }
}
