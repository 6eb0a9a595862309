//! Spreadsheet-backed record store.
//!
//! Each entity lives in its own tab: header in row 1, one record per row
//! below it, primary key in column A and a `deletedAt` tombstone in the last
//! column. The layers, leaf first:
//!
//! - [`sheet::SheetHandle`]: one tab, its column layout and write lock.
//! - [`id_alloc`]: next free key from the key column.
//! - [`codec`]: typed record <-> row of cells.
//! - [`repositories`]: CRUD per entity over a [`repositories::SheetRepo`].
//! - [`Storage`]: every repository behind one facade.

pub mod bootstrap;
pub mod codec;
pub mod error;
pub mod id_alloc;
pub mod models;
pub mod repositories;
pub mod sheet;
pub mod storage;

pub use error::StoreError;
pub use storage::Storage;
