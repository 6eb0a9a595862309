//! Generic CRUD over one entity tab.
//!
//! The per-entity repositories wrap a [`SheetRepo`] and add DTO merging and
//! entity-specific queries. Everything here follows one contract:
//!
//! - listing skips rows without a positive key and tombstoned rows;
//! - lookups by id are linear scans and return `None` rather than erroring;
//! - writes hold the tab's write lock and re-read the target row before
//!   overwriting it, failing with [`StoreError::Conflict`] if it changed;
//! - an update never replaces an undecodable cell with its substitute: cells
//!   the change leaves alone are written back with their original text.

use std::marker::PhantomData;
use std::sync::Arc;

use chrono::Utc;
use vhub_core::types::DbId;

use crate::bootstrap::Bootstrap;
use crate::codec::{decode_row, encode_timestamp, parse_id, DecodeIssue, DecodePolicy, Decoded, RowCodec};
use crate::error::StoreError;
use crate::id_alloc;
use crate::sheet::{trimmed, SheetHandle, SheetLayout};

/// A data row as found in the sheet.
#[derive(Debug, Clone)]
struct ScannedRow {
    /// 1-based sheet row.
    row: u32,
    id: DbId,
    cells: Vec<String>,
    deleted: bool,
}

pub struct SheetRepo<T> {
    sheet: SheetHandle,
    bootstrap: Arc<Bootstrap>,
    policy: DecodePolicy,
    _record: PhantomData<fn() -> T>,
}

impl<T: RowCodec> SheetRepo<T> {
    pub fn new(sheet: SheetHandle, bootstrap: Arc<Bootstrap>, policy: DecodePolicy) -> Self {
        Self {
            sheet,
            bootstrap,
            policy,
            _record: PhantomData,
        }
    }

    /// Layout this repository expects its tab to have.
    pub fn layout() -> SheetLayout {
        SheetLayout::for_columns(T::SHEET, T::COLUMNS)
    }

    pub fn sheet(&self) -> &SheetHandle {
        &self.sheet
    }

    /// Read every data row that carries a positive key.
    async fn scan(&self) -> Result<Vec<ScannedRow>, StoreError> {
        self.bootstrap.ensure().await?;
        let rows = self.sheet.read_all().await?;
        let tombstone = self.sheet.tombstone_col() as usize;

        Ok(rows
            .into_iter()
            .enumerate()
            .skip(1)
            .filter_map(|(index, cells)| {
                let id = parse_id(cells.first()?)?;
                let deleted = cells
                    .get(tombstone)
                    .is_some_and(|c| !c.trim().is_empty());
                Some(ScannedRow {
                    row: index as u32 + 1,
                    id,
                    cells,
                    deleted,
                })
            })
            .collect())
    }

    /// Decode a row under the store's policy, keeping the substitutions.
    fn decode_checked(&self, scanned: &ScannedRow) -> Result<Decoded<T>, StoreError> {
        let data = &scanned.cells[..scanned.cells.len().min(T::COLUMNS.len())];
        let decoded = decode_row::<T>(data, self.policy.missing_timestamp);
        if decoded.is_clean() {
            return Ok(decoded);
        }

        if self.policy.strict {
            return Err(StoreError::Decode {
                sheet: T::SHEET,
                row: scanned.row,
                issues: decoded.issues,
            });
        }
        for issue in &decoded.issues {
            tracing::warn!(
                sheet = T::SHEET,
                row = scanned.row,
                id = scanned.id,
                %issue,
                "Substituted default while decoding row"
            );
        }
        Ok(decoded)
    }

    fn decode(&self, scanned: &ScannedRow) -> Result<T, StoreError> {
        self.decode_checked(scanned).map(|d| d.record)
    }

    /// Every live record, in sheet row order.
    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.scan()
            .await?
            .iter()
            .filter(|r| !r.deleted)
            .map(|r| self.decode(r))
            .collect()
    }

    /// Live records matching `predicate`, in sheet row order.
    pub async fn list_where<P>(&self, predicate: P) -> Result<Vec<T>, StoreError>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.list().await?.into_iter().filter(|r| predicate(r)).collect())
    }

    /// Find a live record by id.
    pub async fn find_by_id(&self, id: DbId) -> Result<Option<T>, StoreError> {
        let rows = self.scan().await?;
        rows.iter()
            .find(|r| r.id == id && !r.deleted)
            .map(|r| self.decode(r))
            .transpose()
    }

    /// Allocate an id, build the record with it and append it.
    pub async fn create<F>(&self, build: F) -> Result<T, StoreError>
    where
        F: FnOnce(DbId) -> T,
    {
        self.bootstrap.ensure().await?;
        let _guard = self.sheet.lock_writes().await;
        self.append_locked(build).await
    }

    /// Like [`SheetRepo::create`], but when a live record matches `existing`
    /// that record is returned and nothing is appended. The lookup and the
    /// append happen under the same write lock.
    pub async fn create_unless<P, F>(&self, existing: P, build: F) -> Result<T, StoreError>
    where
        P: Fn(&T) -> bool,
        F: FnOnce(DbId) -> T,
    {
        self.bootstrap.ensure().await?;
        let _guard = self.sheet.lock_writes().await;
        if let Some(found) = self.list().await?.into_iter().find(|r| existing(r)) {
            tracing::debug!(sheet = T::SHEET, id = found.id(), "{} already exists", T::ENTITY);
            return Ok(found);
        }
        self.append_locked(build).await
    }

    /// Allocate an id and append the record. Caller holds the write lock.
    async fn append_locked<F>(&self, build: F) -> Result<T, StoreError>
    where
        F: FnOnce(DbId) -> T,
    {
        let id = id_alloc::next_id(&self.sheet).await?;
        let record = build(id);
        debug_assert_eq!(record.id(), id, "record must carry the allocated id");

        let mut cells = record.encode();
        cells.push(String::new());
        self.sheet.append_row(cells).await?;

        tracing::info!(sheet = T::SHEET, id, "{} created", T::ENTITY);
        Ok(record)
    }

    /// Re-read `scanned.row` and make sure nobody changed it since the scan.
    async fn verify_unchanged(&self, scanned: &ScannedRow) -> Result<(), StoreError> {
        let current = self.sheet.read_row(scanned.row).await?;
        if trimmed(&current) != trimmed(&scanned.cells) {
            tracing::warn!(
                sheet = T::SHEET,
                row = scanned.row,
                id = scanned.id,
                "Row changed between read and write"
            );
            return Err(StoreError::Conflict {
                sheet: T::SHEET,
                id: scanned.id,
            });
        }
        Ok(())
    }

    /// Apply `change` to a live record and write it back in place.
    ///
    /// Returns `None` when no live record has `id`. The id itself cannot be
    /// changed. Cells that only decoded to a substitute keep their original
    /// text unless `change` gives the field a different value.
    pub async fn update<F>(&self, id: DbId, change: F) -> Result<Option<T>, StoreError>
    where
        F: FnOnce(&mut T),
    {
        self.bootstrap.ensure().await?;
        let _guard = self.sheet.lock_writes().await;

        let rows = self.scan().await?;
        let Some(scanned) = rows.into_iter().find(|r| r.id == id && !r.deleted) else {
            return Ok(None);
        };

        let Decoded { mut record, issues } = self.decode_checked(&scanned)?;
        let before = record.encode();
        change(&mut record);
        if record.id() != id {
            return Err(StoreError::Core(vhub_core::error::CoreError::Validation(
                format!("{} id cannot change", T::ENTITY),
            )));
        }

        let mut cells = record.encode();
        keep_raw_cells::<T>(&mut cells, &before, &scanned.cells, &issues);
        cells.push(String::new());

        self.verify_unchanged(&scanned).await?;
        self.sheet.write_row(scanned.row, cells).await?;
        tracing::debug!(sheet = T::SHEET, id, "{} updated", T::ENTITY);
        Ok(Some(record))
    }

    /// Tombstone a live record. Returns `false` when no live record has `id`.
    ///
    /// The row keeps its position and key, so ids are never reused.
    pub async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        self.bootstrap.ensure().await?;
        let _guard = self.sheet.lock_writes().await;

        let rows = self.scan().await?;
        let Some(scanned) = rows.into_iter().find(|r| r.id == id && !r.deleted) else {
            return Ok(false);
        };

        self.verify_unchanged(&scanned).await?;
        self.sheet
            .write_tombstone(scanned.row, encode_timestamp(&Utc::now()))
            .await?;
        tracing::info!(sheet = T::SHEET, id, "{} deleted", T::ENTITY);
        Ok(true)
    }

    /// Clear the tombstone of a deleted record. Returns `false` when no
    /// deleted record has `id`.
    pub async fn restore(&self, id: DbId) -> Result<bool, StoreError> {
        self.bootstrap.ensure().await?;
        let _guard = self.sheet.lock_writes().await;

        let rows = self.scan().await?;
        let Some(scanned) = rows.into_iter().find(|r| r.id == id && r.deleted) else {
            return Ok(false);
        };

        self.verify_unchanged(&scanned).await?;
        self.sheet.write_tombstone(scanned.row, String::new()).await?;
        tracing::info!(sheet = T::SHEET, id, "{} restored", T::ENTITY);
        Ok(true)
    }
}

/// Restore the raw text of every cell that decoded to a substitute and whose
/// encoded value `change` did not alter.
fn keep_raw_cells<T: RowCodec>(
    cells: &mut [String],
    before: &[String],
    raw: &[String],
    issues: &[DecodeIssue],
) {
    for issue in issues {
        let Some(col) = T::COLUMNS.iter().position(|c| *c == issue.column) else {
            continue;
        };
        if col < cells.len() && cells.get(col) == before.get(col) {
            cells[col] = raw.get(col).cloned().unwrap_or_default();
        }
    }
}
