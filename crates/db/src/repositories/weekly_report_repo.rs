//! Repository for the `WeeklyReports` tab.

use chrono::Utc;
use vhub_core::types::DbId;

use super::{apply, SheetRepo};
use crate::error::StoreError;
use crate::models::weekly_report::{CreateWeeklyReport, UpdateWeeklyReport, WeeklyReport};

pub struct WeeklyReportRepo {
    inner: SheetRepo<WeeklyReport>,
}

impl WeeklyReportRepo {
    pub fn new(inner: SheetRepo<WeeklyReport>) -> Self {
        Self { inner }
    }

    pub async fn create(&self, input: &CreateWeeklyReport) -> Result<WeeklyReport, StoreError> {
        let now = Utc::now();
        self.inner
            .create(|id| WeeklyReport {
                id,
                week_ending: input.week_ending.clone(),
                sandwich_count: input.sandwich_count,
                notes: input.notes.clone().unwrap_or_default(),
                submitted_by: input.submitted_by.clone(),
                submitted_at: now,
            })
            .await
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Option<WeeklyReport>, StoreError> {
        self.inner.find_by_id(id).await
    }

    pub async fn list(&self) -> Result<Vec<WeeklyReport>, StoreError> {
        self.inner.list().await
    }

    /// Reports with the latest week first. `YYYY-MM-DD` sorts lexically.
    pub async fn list_recent(&self) -> Result<Vec<WeeklyReport>, StoreError> {
        let mut reports = self.inner.list().await?;
        reports.sort_by(|a, b| b.week_ending.cmp(&a.week_ending).then(b.id.cmp(&a.id)));
        Ok(reports)
    }

    pub async fn update(
        &self,
        id: DbId,
        input: &UpdateWeeklyReport,
    ) -> Result<Option<WeeklyReport>, StoreError> {
        self.inner
            .update(id, |report| {
                apply(&mut report.week_ending, &input.week_ending);
                apply(&mut report.sandwich_count, &input.sandwich_count);
                apply(&mut report.notes, &input.notes);
                apply(&mut report.submitted_by, &input.submitted_by);
            })
            .await
    }

    pub async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        self.inner.delete(id).await
    }
}
