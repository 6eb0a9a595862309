//! Errors raised by spreadsheet clients.

/// Errors from the spreadsheet access layer.
#[derive(Debug, thiserror::Error)]
pub enum SheetsError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The Sheets API returned a non-2xx status code.
    #[error("Sheets API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The service identity may not read or write the spreadsheet.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Building or exchanging the service-account assertion failed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// A range string could not be parsed as A1 notation.
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// The range names a tab that does not exist.
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// A response body did not have the expected JSON shape.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
