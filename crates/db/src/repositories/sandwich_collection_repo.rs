//! Repository for the `SandwichCollections` tab.

use chrono::Utc;
use vhub_core::collections::CollectionStats;
use vhub_core::types::DbId;

use super::{apply, SheetRepo};
use crate::error::StoreError;
use crate::models::blob_from_value;
use crate::models::sandwich_collection::{
    CreateSandwichCollection, SandwichCollection, UpdateSandwichCollection,
};

pub struct SandwichCollectionRepo {
    inner: SheetRepo<SandwichCollection>,
}

/// Newest collection date first, ties broken by newest id.
fn newest_first(a: &SandwichCollection, b: &SandwichCollection) -> std::cmp::Ordering {
    b.collection_date
        .cmp(&a.collection_date)
        .then(b.id.cmp(&a.id))
}

impl SandwichCollectionRepo {
    pub fn new(inner: SheetRepo<SandwichCollection>) -> Self {
        Self { inner }
    }

    pub async fn create(
        &self,
        input: &CreateSandwichCollection,
    ) -> Result<SandwichCollection, StoreError> {
        let now = Utc::now();
        let group_collections = input
            .group_collections
            .clone()
            .map(blob_from_value)
            .unwrap_or_default();
        self.inner
            .create(|id| SandwichCollection {
                id,
                collection_date: input.collection_date.clone(),
                host_name: input.host_name.clone(),
                individual_sandwiches: input.individual_sandwiches,
                group_collections,
                submitted_at: now,
            })
            .await
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Option<SandwichCollection>, StoreError> {
        self.inner.find_by_id(id).await
    }

    pub async fn list(&self) -> Result<Vec<SandwichCollection>, StoreError> {
        self.inner.list().await
    }

    /// Entries whose host matches `host`, ignoring case and surrounding
    /// whitespace.
    pub async fn list_by_host(&self, host: &str) -> Result<Vec<SandwichCollection>, StoreError> {
        let host = host.trim();
        let mut entries = self
            .inner
            .list_where(|c| c.host_name.trim().eq_ignore_ascii_case(host))
            .await?;
        entries.sort_by(newest_first);
        Ok(entries)
    }

    /// One page of entries, newest collection date first.
    pub async fn list_page(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<SandwichCollection>, StoreError> {
        let mut entries = self.inner.list().await?;
        entries.sort_by(newest_first);
        Ok(entries.into_iter().skip(offset).take(limit).collect())
    }

    /// Totals across every live entry.
    pub async fn stats(&self) -> Result<CollectionStats, StoreError> {
        let mut stats = CollectionStats::default();
        for entry in self.inner.list().await? {
            stats.add(entry.individual_sandwiches, &entry.group_collections);
        }
        Ok(stats)
    }

    pub async fn update(
        &self,
        id: DbId,
        input: &UpdateSandwichCollection,
    ) -> Result<Option<SandwichCollection>, StoreError> {
        let group_collections = input.group_collections.clone().map(blob_from_value);
        self.inner
            .update(id, |entry| {
                apply(&mut entry.collection_date, &input.collection_date);
                apply(&mut entry.host_name, &input.host_name);
                apply(&mut entry.individual_sandwiches, &input.individual_sandwiches);
                apply(&mut entry.group_collections, &group_collections);
            })
            .await
    }

    pub async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        self.inner.delete(id).await
    }
}
