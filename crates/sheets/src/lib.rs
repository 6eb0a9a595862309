//! Spreadsheet access for the volunteer hub.
//!
//! [`SheetsClient`] is the seam the storage adapter talks to. Two
//! implementations ship with the crate:
//!
//! - [`GoogleSheetsClient`] calls the Google Sheets v4 REST API with a
//!   service-account token.
//! - [`MemorySheetsClient`] keeps every tab in process memory; used by tests
//!   and by the `memory` storage backend for local development.

pub mod auth;
pub mod client;
pub mod error;
pub mod google;
pub mod memory;
pub mod range;

pub use client::{BatchRequest, Rows, SheetMeta, SheetsClient, SpreadsheetMeta};
pub use error::SheetsError;
pub use google::GoogleSheetsClient;
pub use memory::MemorySheetsClient;
pub use range::A1Range;
