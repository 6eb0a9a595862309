//! In-memory spreadsheet.
//!
//! Implements [`SheetsClient`] over a process-local grid with the same range
//! semantics as the Sheets API, so stores behave identically against it.
//! Backs the `memory` storage backend and every adapter test.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{BatchRequest, Rows, SheetMeta, SheetsClient, SpreadsheetMeta};
use crate::error::SheetsError;
use crate::range::A1Range;

struct MemorySheet {
    sheet_id: i64,
    title: String,
    rows: Rows,
}

impl MemorySheet {
    /// Number of rows up to and including the last one holding any text.
    fn used_rows(&self) -> usize {
        self.rows
            .iter()
            .rposition(|row| row.iter().any(|c| !c.is_empty()))
            .map_or(0, |i| i + 1)
    }

    fn write(&mut self, top: usize, left: usize, values: Rows) {
        for (offset, cells) in values.into_iter().enumerate() {
            let index = top + offset;
            if self.rows.len() <= index {
                self.rows.resize_with(index + 1, Vec::new);
            }
            let row = &mut self.rows[index];
            if row.len() < left + cells.len() {
                row.resize(left + cells.len(), String::new());
            }
            for (col, value) in cells.into_iter().enumerate() {
                row[left + col] = value;
            }
        }
    }
}

#[derive(Default)]
struct Workbook {
    sheets: Vec<MemorySheet>,
    next_sheet_id: i64,
}

impl Workbook {
    fn sheet_mut(&mut self, title: &str) -> Result<&mut MemorySheet, SheetsError> {
        self.sheets
            .iter_mut()
            .find(|s| s.title == title)
            .ok_or_else(|| SheetsError::SheetNotFound(title.to_string()))
    }

    fn add_sheet(&mut self, title: &str, rows: Rows) {
        self.next_sheet_id += 1;
        self.sheets.push(MemorySheet {
            sheet_id: self.next_sheet_id,
            title: title.to_string(),
            rows,
        });
    }
}

/// Thread-safe in-memory [`SheetsClient`].
pub struct MemorySheetsClient {
    spreadsheet_id: String,
    workbook: Mutex<Workbook>,
    deny_access: AtomicBool,
    metadata_fetches: AtomicUsize,
}

impl Default for MemorySheetsClient {
    fn default() -> Self {
        Self::new("memory")
    }
}

impl MemorySheetsClient {
    pub fn new(spreadsheet_id: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            workbook: Mutex::new(Workbook::default()),
            deny_access: AtomicBool::new(false),
            metadata_fetches: AtomicUsize::new(0),
        }
    }

    /// Seed a tab with raw rows (header included).
    pub fn with_sheet(self, title: &str, rows: Rows) -> Self {
        self.lock().add_sheet(title, rows);
        self
    }

    /// Make every call fail as if the spreadsheet were not shared with the
    /// service identity.
    pub fn set_deny_access(&self, deny: bool) {
        self.deny_access.store(deny, Ordering::SeqCst);
    }

    /// How many times [`SheetsClient::spreadsheet`] has been called.
    pub fn metadata_fetches(&self) -> usize {
        self.metadata_fetches.load(Ordering::SeqCst)
    }

    /// Snapshot of a tab's raw rows, or `None` if the tab does not exist.
    pub fn sheet_rows(&self, title: &str) -> Option<Rows> {
        self.lock()
            .sheets
            .iter()
            .find(|s| s.title == title)
            .map(|s| s.rows[..s.used_rows()].to_vec())
    }

    /// Rows in use (header included), counting blank rows between data.
    pub fn row_count(&self, title: &str) -> usize {
        self.lock()
            .sheets
            .iter()
            .find(|s| s.title == title)
            .map_or(0, MemorySheet::used_rows)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Workbook> {
        // A panic while holding the lock leaves plain data behind; keep going.
        self.workbook.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_access(&self) -> Result<(), SheetsError> {
        if self.deny_access.load(Ordering::SeqCst) {
            return Err(SheetsError::PermissionDenied(format!(
                "The caller does not have permission to access spreadsheet {}",
                self.spreadsheet_id
            )));
        }
        Ok(())
    }
}

/// Reject writes wider or taller than the target range, as the API does.
fn check_fits(range: &A1Range, values: &Rows) -> Result<(), SheetsError> {
    if let Some(end_col) = range.end_col {
        let width = (end_col - range.start_col + 1) as usize;
        if values.iter().any(|row| row.len() > width) {
            return Err(SheetsError::InvalidRange(format!(
                "{range}: row wider than {width} columns"
            )));
        }
    }
    if let Some(end_row) = range.end_row {
        let height = (end_row - range.first_row() + 1) as usize;
        if values.len() > height {
            return Err(SheetsError::InvalidRange(format!(
                "{range}: more than {height} rows"
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl SheetsClient for MemorySheetsClient {
    fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    async fn spreadsheet(&self) -> Result<SpreadsheetMeta, SheetsError> {
        self.metadata_fetches.fetch_add(1, Ordering::SeqCst);
        self.check_access()?;
        let workbook = self.lock();
        Ok(SpreadsheetMeta {
            sheets: workbook
                .sheets
                .iter()
                .map(|s| SheetMeta {
                    sheet_id: s.sheet_id,
                    title: s.title.clone(),
                })
                .collect(),
        })
    }

    async fn batch_update(&self, requests: Vec<BatchRequest>) -> Result<(), SheetsError> {
        self.check_access()?;
        let mut workbook = self.lock();

        // Validate everything first so a bad request leaves no partial change.
        let mut pending_titles: Vec<&str> = Vec::new();
        for request in &requests {
            match request {
                BatchRequest::AddSheet { title } => {
                    if workbook.sheets.iter().any(|s| &s.title == title)
                        || pending_titles.contains(&title.as_str())
                    {
                        return Err(SheetsError::Api {
                            status: 400,
                            body: format!("A sheet with the name \"{title}\" already exists"),
                        });
                    }
                    pending_titles.push(title.as_str());
                }
                BatchRequest::DeleteRows {
                    sheet_id,
                    start_index,
                    end_index,
                } => {
                    if !workbook.sheets.iter().any(|s| s.sheet_id == *sheet_id) {
                        return Err(SheetsError::Api {
                            status: 400,
                            body: format!("No grid with id: {sheet_id}"),
                        });
                    }
                    if end_index <= start_index {
                        return Err(SheetsError::Api {
                            status: 400,
                            body: "endIndex must be greater than startIndex".to_string(),
                        });
                    }
                }
            }
        }

        for request in requests {
            match request {
                BatchRequest::AddSheet { title } => workbook.add_sheet(&title, Vec::new()),
                BatchRequest::DeleteRows {
                    sheet_id,
                    start_index,
                    end_index,
                } => {
                    if let Some(sheet) = workbook.sheets.iter_mut().find(|s| s.sheet_id == sheet_id)
                    {
                        let len = sheet.rows.len();
                        let start = (start_index as usize).min(len);
                        let end = (end_index as usize).min(len);
                        sheet.rows.drain(start..end);
                    }
                }
            }
        }
        Ok(())
    }

    async fn get_values(&self, range: &str) -> Result<Rows, SheetsError> {
        self.check_access()?;
        let range: A1Range = range.parse()?;
        let mut workbook = self.lock();
        let sheet = workbook.sheet_mut(&range.sheet)?;

        let top = (range.first_row() - 1) as usize;
        let bottom = match range.end_row {
            Some(end) => (end as usize).min(sheet.rows.len()),
            None => sheet.rows.len(),
        };
        let left = range.start_col as usize;

        let mut values: Rows = sheet
            .rows
            .get(top..bottom.max(top))
            .unwrap_or_default()
            .iter()
            .map(|row| {
                let right = match range.end_col {
                    Some(end) => (end as usize + 1).min(row.len()),
                    None => row.len(),
                };
                let mut cells: Vec<String> =
                    row.get(left..right.max(left)).unwrap_or_default().to_vec();
                while cells.last().is_some_and(String::is_empty) {
                    cells.pop();
                }
                cells
            })
            .collect();
        while values.last().is_some_and(Vec::is_empty) {
            values.pop();
        }
        Ok(values)
    }

    async fn update_values(&self, range: &str, rows: Rows) -> Result<(), SheetsError> {
        self.check_access()?;
        let range: A1Range = range.parse()?;
        check_fits(&range, &rows)?;
        let mut workbook = self.lock();
        let sheet = workbook.sheet_mut(&range.sheet)?;
        sheet.write(
            (range.first_row() - 1) as usize,
            range.start_col as usize,
            rows,
        );
        Ok(())
    }

    async fn append_values(&self, range: &str, rows: Rows) -> Result<(), SheetsError> {
        self.check_access()?;
        let range: A1Range = range.parse()?;
        if let Some(end_col) = range.end_col {
            let width = (end_col - range.start_col + 1) as usize;
            if rows.iter().any(|row| row.len() > width) {
                return Err(SheetsError::InvalidRange(format!(
                    "{range}: row wider than {width} columns"
                )));
            }
        }
        let mut workbook = self.lock();
        let sheet = workbook.sheet_mut(&range.sheet)?;
        let top = sheet.used_rows();
        sheet.write(top, range.start_col as usize, rows);
        Ok(())
    }
}
