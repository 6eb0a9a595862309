//! A1-notation ranges.
//!
//! Stores never format range strings by hand; they build an [`A1Range`] and
//! let `Display` produce the wire form (`Projects!A2:H`, `'Meeting Notes'!A:A`).
//! The in-memory client parses the same strings back with `FromStr`.
//!
//! Columns are 0-based indices, rows are 1-based sheet rows.

use std::fmt;
use std::str::FromStr;

use crate::error::SheetsError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Range {
    pub sheet: String,
    pub start_col: u32,
    /// First row; `None` means the range starts at row 1 (column-only form).
    pub start_row: Option<u32>,
    /// Last column; `None` means the whole sheet.
    pub end_col: Option<u32>,
    /// Last row; `None` means "to the last row with data".
    pub end_row: Option<u32>,
}

impl A1Range {
    /// Every cell of a tab (`Sheet`).
    fn whole(sheet: &str) -> Self {
        Self {
            sheet: sheet.to_string(),
            start_col: 0,
            start_row: None,
            end_col: None,
            end_row: None,
        }
    }

    /// Full-height column span (`Sheet!A:H`).
    pub fn columns(sheet: &str, start_col: u32, end_col: u32) -> Self {
        Self {
            sheet: sheet.to_string(),
            start_col,
            start_row: None,
            end_col: Some(end_col),
            end_row: None,
        }
    }

    /// One row of `width` cells starting at column A (`Sheet!A5:H5`).
    pub fn row(sheet: &str, width: u32, row: u32) -> Self {
        Self {
            sheet: sheet.to_string(),
            start_col: 0,
            start_row: Some(row),
            end_col: Some(width.saturating_sub(1)),
            end_row: Some(row),
        }
    }

    /// A single cell (`Sheet!C7`).
    pub fn cell(sheet: &str, col: u32, row: u32) -> Self {
        Self {
            sheet: sheet.to_string(),
            start_col: col,
            start_row: Some(row),
            end_col: Some(col),
            end_row: Some(row),
        }
    }

    /// First sheet row covered by the range.
    pub fn first_row(&self) -> u32 {
        self.start_row.unwrap_or(1)
    }
}

/// Convert a 0-based column index to its letter form (`0 -> A`, `27 -> AB`).
pub fn column_letters(index: u32) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Convert column letters to a 0-based index. Case-insensitive.
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    let mut n: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        n = n.checked_mul(26)?.checked_add(digit)?;
    }
    Some(n - 1)
}

fn needs_quotes(sheet: &str) -> bool {
    !sheet.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for A1Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if needs_quotes(&self.sheet) {
            write!(f, "'{}'", self.sheet.replace('\'', "''"))?;
        } else {
            f.write_str(&self.sheet)?;
        }

        let Some(end_col) = self.end_col else {
            return Ok(());
        };

        write!(f, "!{}", column_letters(self.start_col))?;
        if let Some(row) = self.start_row {
            write!(f, "{row}")?;
        }
        if self.start_row.is_some() && self.start_row == self.end_row && self.start_col == end_col
        {
            return Ok(());
        }
        write!(f, ":{}", column_letters(end_col))?;
        if let Some(row) = self.end_row {
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Split `Sheet!A1:B2` into the unquoted sheet name and the cell part.
fn split_sheet(s: &str) -> Result<(String, Option<&str>), SheetsError> {
    if let Some(rest) = s.strip_prefix('\'') {
        let mut name = String::new();
        let mut chars = rest.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            if c == '\'' {
                if matches!(chars.peek(), Some((_, '\''))) {
                    chars.next();
                    name.push('\'');
                    continue;
                }
                let tail = &rest[i + 1..];
                return match tail.strip_prefix('!') {
                    Some(cells) => Ok((name, Some(cells))),
                    None if tail.is_empty() => Ok((name, None)),
                    None => Err(SheetsError::InvalidRange(s.to_string())),
                };
            }
            name.push(c);
        }
        return Err(SheetsError::InvalidRange(s.to_string()));
    }

    match s.rsplit_once('!') {
        Some((sheet, cells)) => Ok((sheet.to_string(), Some(cells))),
        None => Ok((s.to_string(), None)),
    }
}

/// Parse a cell reference such as `B`, `B7` into `(column, row)`.
fn parse_ref(r: &str) -> Option<(u32, Option<u32>)> {
    let split = r.find(|c: char| c.is_ascii_digit()).unwrap_or(r.len());
    let (letters, digits) = r.split_at(split);
    let col = column_index(letters)?;
    let row = if digits.is_empty() {
        None
    } else {
        match digits.parse::<u32>() {
            Ok(0) | Err(_) => return None,
            Ok(n) => Some(n),
        }
    };
    Some((col, row))
}

impl FromStr for A1Range {
    type Err = SheetsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SheetsError::InvalidRange(s.to_string());
        let (sheet, cells) = split_sheet(s.trim())?;
        if sheet.is_empty() {
            return Err(invalid());
        }

        let Some(cells) = cells else {
            return Ok(A1Range::whole(&sheet));
        };

        let (start, end) = match cells.split_once(':') {
            Some((a, b)) => (a, b),
            None => (cells, cells),
        };
        let (start_col, start_row) = parse_ref(start).ok_or_else(invalid)?;
        let (end_col, end_row) = parse_ref(end).ok_or_else(invalid)?;
        if end_col < start_col {
            return Err(invalid());
        }
        if let (Some(a), Some(b)) = (start_row, end_row) {
            if b < a {
                return Err(invalid());
            }
        }

        Ok(A1Range {
            sheet,
            start_col,
            start_row,
            end_col: Some(end_col),
            end_row,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_letters_cover_multi_letter_columns() {
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(7), "H");
        assert_eq!(column_letters(25), "Z");
        assert_eq!(column_letters(26), "AA");
        assert_eq!(column_letters(27), "AB");
        assert_eq!(column_index("AB"), Some(27));
        assert_eq!(column_index("h"), Some(7));
        assert_eq!(column_index(""), None);
    }

    #[test]
    fn formats_the_shapes_stores_use() {
        assert_eq!(A1Range::columns("Projects", 0, 0).to_string(), "Projects!A:A");
        assert_eq!(A1Range::row("Projects", 8, 5).to_string(), "Projects!A5:H5");
        assert_eq!(A1Range::cell("Projects", 2, 7).to_string(), "Projects!C7");
        assert_eq!(A1Range::whole("Users").to_string(), "Users");
    }

    #[test]
    fn quotes_sheet_names_with_spaces_and_apostrophes() {
        let range = A1Range::row("Bob's Notes", 3, 1);
        assert_eq!(range.to_string(), "'Bob''s Notes'!A1:C1");
        assert_eq!(range.to_string().parse::<A1Range>().unwrap(), range);
    }

    #[test]
    fn parses_open_ended_ranges() {
        let range: A1Range = "Messages!A2:I".parse().unwrap();
        assert_eq!(range.sheet, "Messages");
        assert_eq!(range.start_row, Some(2));
        assert_eq!(range.end_col, Some(8));
        assert_eq!(range.end_row, None);
        assert_eq!(range.first_row(), 2);

        let whole: A1Range = "Messages".parse().unwrap();
        assert_eq!(whole.end_col, None);
    }

    #[test]
    fn rejects_malformed_ranges() {
        for bad in ["", "Sheet!", "Sheet!7", "Sheet!B2:A2", "Sheet!A5:B2", "'Open!A1", "Sheet!A0"] {
            assert!(bad.parse::<A1Range>().is_err(), "{bad} should not parse");
        }
    }
}
