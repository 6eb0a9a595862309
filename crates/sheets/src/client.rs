//! The spreadsheet client trait shared by every backend.

use async_trait::async_trait;

use crate::error::SheetsError;

/// Cell values in row-major order. Every cell travels as text.
pub type Rows = Vec<Vec<String>>;

/// Properties of one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetMeta {
    /// Numeric id used by structural requests.
    pub sheet_id: i64,
    pub title: String,
}

/// Spreadsheet-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpreadsheetMeta {
    pub sheets: Vec<SheetMeta>,
}

impl SpreadsheetMeta {
    /// Look up a tab by title.
    pub fn sheet(&self, title: &str) -> Option<&SheetMeta> {
        self.sheets.iter().find(|s| s.title == title)
    }
}

/// A structural change applied through `batch_update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchRequest {
    /// Create a new, empty tab.
    AddSheet { title: String },
    /// Remove rows `[start_index, end_index)` (0-based) from a tab.
    DeleteRows {
        sheet_id: i64,
        start_index: u32,
        end_index: u32,
    },
}

/// Minimal surface of the Google Sheets API the storage adapter relies on.
///
/// Implementations must be cheap to share behind an `Arc`; stores hold one
/// reference each and call it concurrently.
#[async_trait]
pub trait SheetsClient: Send + Sync {
    /// Identifier of the spreadsheet this client is bound to.
    fn spreadsheet_id(&self) -> &str;

    /// Fetch tab metadata.
    async fn spreadsheet(&self) -> Result<SpreadsheetMeta, SheetsError>;

    /// Apply structural changes atomically.
    async fn batch_update(&self, requests: Vec<BatchRequest>) -> Result<(), SheetsError>;

    /// Read the values in `range`. Trailing empty cells in a row and trailing
    /// empty rows are omitted, matching the Sheets API.
    async fn get_values(&self, range: &str) -> Result<Rows, SheetsError>;

    /// Overwrite the cells starting at the top-left corner of `range`.
    async fn update_values(&self, range: &str, rows: Rows) -> Result<(), SheetsError>;

    /// Append rows after the last row with data in `range`'s tab.
    async fn append_values(&self, range: &str, rows: Rows) -> Result<(), SheetsError>;
}
