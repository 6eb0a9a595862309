//! Primary-key allocation.
//!
//! The next id is one more than the largest key in column A. Deleted rows
//! keep their key cell (they are tombstoned, not blanked), so an id is never
//! handed out twice even when the newest record is deleted.

use vhub_core::types::DbId;

use crate::codec::parse_id;
use crate::error::StoreError;
use crate::sheet::SheetHandle;

/// Next id given the key column's cells, header included.
///
/// Cells that are not positive integers (the header, blanks, stray text)
/// do not count.
pub fn next_id_from_cells(cells: &[String]) -> DbId {
    cells.iter().filter_map(|c| parse_id(c)).max().unwrap_or(0) + 1
}

/// Read the key column of `sheet` and compute the next id.
///
/// Callers must hold the sheet's write lock until the new row is appended.
pub async fn next_id(sheet: &SheetHandle) -> Result<DbId, StoreError> {
    let cells = sheet.read_key_column().await?;
    let id = next_id_from_cells(&cells);
    tracing::debug!(sheet = sheet.name(), id, "Allocated id");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn empty_sheet_starts_at_one() {
        assert_eq!(next_id_from_cells(&[]), 1);
        assert_eq!(next_id_from_cells(&cells(&["id"])), 1);
    }

    #[test]
    fn skips_header_blanks_and_garbage() {
        assert_eq!(next_id_from_cells(&cells(&["id", "3", "", "n/a", "7", "2"])), 8);
    }

    #[test]
    fn ignores_non_positive_keys() {
        assert_eq!(next_id_from_cells(&cells(&["id", "-9", "0"])), 1);
    }
}
