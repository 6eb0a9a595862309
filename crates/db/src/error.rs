//! Errors raised by the record store.

use vhub_core::error::CoreError;
use vhub_core::types::DbId;
use vhub_sheets::SheetsError;

use crate::codec::DecodeIssue;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A spreadsheet call failed. Not retried.
    #[error("{operation} on sheet '{sheet}' failed: {source}")]
    Backend {
        operation: &'static str,
        sheet: String,
        #[source]
        source: SheetsError,
    },

    /// The service identity cannot access the spreadsheet. Fatal for the
    /// request; needs the spreadsheet to be shared with the service account.
    #[error("Permission denied on spreadsheet {spreadsheet_id}: {reason}")]
    PermissionDenied {
        spreadsheet_id: String,
        reason: String,
    },

    /// The row changed between the read and the write-back.
    #[error("Row for {sheet} id {id} changed since it was read")]
    Conflict { sheet: &'static str, id: DbId },

    /// A row held cells that could not be decoded (strict decoding only).
    #[error("Row {row} of sheet '{sheet}' has {} undecodable cell(s)", .issues.len())]
    Decode {
        sheet: &'static str,
        row: u32,
        issues: Vec<DecodeIssue>,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Attach operation context to a client error, logging it on the way.
    ///
    /// Access errors become [`StoreError::PermissionDenied`] wherever they
    /// surface, not only during worksheet bootstrap.
    pub fn backend(
        operation: &'static str,
        sheet: &str,
        spreadsheet_id: &str,
        source: SheetsError,
    ) -> Self {
        tracing::error!(operation, sheet, error = %source, "Spreadsheet call failed");
        match source {
            SheetsError::PermissionDenied(reason) => StoreError::PermissionDenied {
                spreadsheet_id: spreadsheet_id.to_string(),
                reason,
            },
            source => StoreError::Backend {
                operation,
                sheet: sheet.to_string(),
                source,
            },
        }
    }
}
