//! Repository for the `MeetingMinutes` tab.

use vhub_core::types::DbId;

use super::{apply, SheetRepo};
use crate::error::StoreError;
use crate::models::meeting_minutes::{
    CreateMeetingMinutes, MeetingMinutes, UpdateMeetingMinutes, DEFAULT_MINUTES_COLOR,
};

pub struct MeetingMinutesRepo {
    inner: SheetRepo<MeetingMinutes>,
}

impl MeetingMinutesRepo {
    pub fn new(inner: SheetRepo<MeetingMinutes>) -> Self {
        Self { inner }
    }

    pub async fn create(&self, input: &CreateMeetingMinutes) -> Result<MeetingMinutes, StoreError> {
        self.inner
            .create(|id| MeetingMinutes {
                id,
                title: input.title.clone(),
                date: input.date.clone(),
                summary: input.summary.clone().unwrap_or_default(),
                color: input
                    .color
                    .clone()
                    .unwrap_or_else(|| DEFAULT_MINUTES_COLOR.to_string()),
            })
            .await
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Option<MeetingMinutes>, StoreError> {
        self.inner.find_by_id(id).await
    }

    pub async fn list(&self) -> Result<Vec<MeetingMinutes>, StoreError> {
        self.inner.list().await
    }

    pub async fn update(
        &self,
        id: DbId,
        input: &UpdateMeetingMinutes,
    ) -> Result<Option<MeetingMinutes>, StoreError> {
        self.inner
            .update(id, |minutes| {
                apply(&mut minutes.title, &input.title);
                apply(&mut minutes.date, &input.date);
                apply(&mut minutes.summary, &input.summary);
                apply(&mut minutes.color, &input.color);
            })
            .await
    }

    pub async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        self.inner.delete(id).await
    }
}
