//! Repository for the `DriveLinks` tab.

use vhub_core::types::DbId;

use super::{apply, SheetRepo};
use crate::error::StoreError;
use crate::models::drive_link::{
    CreateDriveLink, DriveLink, UpdateDriveLink, DEFAULT_ICON, DEFAULT_ICON_COLOR,
};

pub struct DriveLinkRepo {
    inner: SheetRepo<DriveLink>,
}

impl DriveLinkRepo {
    pub fn new(inner: SheetRepo<DriveLink>) -> Self {
        Self { inner }
    }

    pub async fn create(&self, input: &CreateDriveLink) -> Result<DriveLink, StoreError> {
        self.inner
            .create(|id| DriveLink {
                id,
                title: input.title.clone(),
                description: input.description.clone().unwrap_or_default(),
                url: input.url.clone(),
                icon: input.icon.clone().unwrap_or_else(|| DEFAULT_ICON.to_string()),
                icon_color: input
                    .icon_color
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ICON_COLOR.to_string()),
            })
            .await
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Option<DriveLink>, StoreError> {
        self.inner.find_by_id(id).await
    }

    pub async fn list(&self) -> Result<Vec<DriveLink>, StoreError> {
        self.inner.list().await
    }

    pub async fn update(
        &self,
        id: DbId,
        input: &UpdateDriveLink,
    ) -> Result<Option<DriveLink>, StoreError> {
        self.inner
            .update(id, |link| {
                apply(&mut link.title, &input.title);
                apply(&mut link.description, &input.description);
                apply(&mut link.url, &input.url);
                apply(&mut link.icon, &input.icon);
                apply(&mut link.icon_color, &input.icon_color);
            })
            .await
    }

    pub async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        self.inner.delete(id).await
    }
}
