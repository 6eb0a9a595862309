//! One tab of the spreadsheet and its declared layout.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};
use vhub_sheets::{A1Range, Rows, SheetsClient};

use crate::codec::TOMBSTONE_COLUMN;
use crate::error::StoreError;

/// Name and header of a tab that must exist before any store runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    pub name: &'static str,
    pub header: Vec<String>,
}

impl SheetLayout {
    /// Layout for an entity tab: its data columns plus the tombstone column.
    pub fn for_columns(name: &'static str, columns: &[&str]) -> Self {
        let header = columns
            .iter()
            .chain(std::iter::once(&TOMBSTONE_COLUMN))
            .map(|c| c.to_string())
            .collect();
        Self { name, header }
    }
}

/// A tab plus the client used to reach it.
///
/// Writes to one tab are serialized through [`SheetHandle::lock_writes`] so
/// id allocation and read-modify-write cycles never interleave within this
/// process.
pub struct SheetHandle {
    client: Arc<dyn SheetsClient>,
    layout: SheetLayout,
    writes: Mutex<()>,
}

impl SheetHandle {
    pub fn new(client: Arc<dyn SheetsClient>, layout: SheetLayout) -> Self {
        Self {
            client,
            layout,
            writes: Mutex::new(()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.layout.name
    }

    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    /// Number of columns including the tombstone.
    pub fn width(&self) -> u32 {
        self.layout.header.len() as u32
    }

    /// 0-based index of the tombstone column.
    pub fn tombstone_col(&self) -> u32 {
        self.width() - 1
    }

    pub fn spreadsheet_id(&self) -> &str {
        self.client.spreadsheet_id()
    }

    /// Wait for exclusive write access to this tab.
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.writes.lock().await
    }

    fn fail(&self, operation: &'static str, err: vhub_sheets::SheetsError) -> StoreError {
        StoreError::backend(operation, self.name(), self.spreadsheet_id(), err)
    }

    /// Every row of the tab, header included. Index `i` is sheet row `i + 1`.
    pub async fn read_all(&self) -> Result<Rows, StoreError> {
        let range = A1Range::columns(self.name(), 0, self.tombstone_col());
        self.client
            .get_values(&range.to_string())
            .await
            .map_err(|e| self.fail("read rows", e))
    }

    /// The key column (column A), header included.
    pub async fn read_key_column(&self) -> Result<Vec<String>, StoreError> {
        let range = A1Range::columns(self.name(), 0, 0);
        let rows = self
            .client
            .get_values(&range.to_string())
            .await
            .map_err(|e| self.fail("read key column", e))?;
        Ok(rows
            .into_iter()
            .map(|row| row.into_iter().next().unwrap_or_default())
            .collect())
    }

    /// The cells of one sheet row (1-based), trailing blanks trimmed.
    pub async fn read_row(&self, row: u32) -> Result<Vec<String>, StoreError> {
        let range = A1Range::row(self.name(), self.width(), row);
        let rows = self
            .client
            .get_values(&range.to_string())
            .await
            .map_err(|e| self.fail("read row", e))?;
        Ok(rows.into_iter().next().unwrap_or_default())
    }

    /// Overwrite one full row (1-based).
    pub async fn write_row(&self, row: u32, cells: Vec<String>) -> Result<(), StoreError> {
        let range = A1Range::row(self.name(), self.width(), row);
        self.client
            .update_values(&range.to_string(), vec![cells])
            .await
            .map_err(|e| self.fail("write row", e))
    }

    /// Overwrite the tombstone cell of one row.
    pub async fn write_tombstone(&self, row: u32, value: String) -> Result<(), StoreError> {
        let range = A1Range::cell(self.name(), self.tombstone_col(), row);
        self.client
            .update_values(&range.to_string(), vec![vec![value]])
            .await
            .map_err(|e| self.fail("write tombstone", e))
    }

    /// Append one row after the last row with data.
    pub async fn append_row(&self, cells: Vec<String>) -> Result<(), StoreError> {
        let range = A1Range::columns(self.name(), 0, self.tombstone_col());
        self.client
            .append_values(&range.to_string(), vec![cells])
            .await
            .map_err(|e| self.fail("append row", e))
    }
}

/// Drop trailing empty cells so rows compare the way the API returns them.
pub fn trimmed(cells: &[String]) -> &[String] {
    let end = cells
        .iter()
        .rposition(|c| !c.is_empty())
        .map_or(0, |i| i + 1);
    &cells[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_appends_tombstone_column() {
        let layout = SheetLayout::for_columns("DriveLinks", &["id", "title"]);
        assert_eq!(layout.header, ["id", "title", "deletedAt"]);
    }

    #[test]
    fn trimmed_ignores_trailing_blanks_only() {
        let cells: Vec<String> = ["1", "", "x", "", ""].iter().map(|s| s.to_string()).collect();
        assert_eq!(trimmed(&cells), &cells[..3]);
        assert!(trimmed(&[String::new()]).is_empty());
    }
}
