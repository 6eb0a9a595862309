//! Row codecs: typed records to and from rows of spreadsheet cells.
//!
//! Every entity declares its tab name and ordered column list; column order
//! is the persisted layout. Decoding is lenient but never silent: whenever a
//! cell has to be replaced by a default, the [`RowReader`] records a
//! [`DecodeIssue`] so the caller can log it or, under a strict
//! [`DecodePolicy`], refuse the row.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use vhub_core::types::{DbId, Timestamp};

/// Trailing column present on every tab; non-empty means deleted.
pub const TOMBSTONE_COLUMN: &str = "deletedAt";

/// What a missing or malformed required timestamp decodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampFallback {
    /// The time of decoding.
    #[default]
    Now,
    /// `1970-01-01T00:00:00Z`, which sorts such rows first.
    UnixEpoch,
}

impl FromStr for TimestampFallback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "now" => Ok(TimestampFallback::Now),
            "epoch" | "unix_epoch" => Ok(TimestampFallback::UnixEpoch),
            other => Err(format!("unknown timestamp fallback '{other}'")),
        }
    }
}

/// How stores treat cells that need a default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodePolicy {
    pub missing_timestamp: TimestampFallback,
    /// Reject rows with any [`DecodeIssue`] instead of logging and
    /// returning the defaulted record.
    pub strict: bool,
}

/// The value substituted for a cell that could not be used as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Substitute {
    Zero,
    Null,
    Now,
    UnixEpoch,
    Default,
}

impl fmt::Display for Substitute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Substitute::Zero => "0",
            Substitute::Null => "null",
            Substitute::Now => "now",
            Substitute::UnixEpoch => "unix epoch",
            Substitute::Default => "default",
        };
        f.write_str(s)
    }
}

/// One cell that decoded to a substitute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeIssue {
    pub column: &'static str,
    pub raw: String,
    pub substitute: Substitute,
}

impl fmt::Display for DecodeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: '{}' replaced by {}",
            self.column, self.raw, self.substitute
        )
    }
}

/// A decoded record plus every substitution made while decoding it.
#[derive(Debug, Clone)]
pub struct Decoded<T> {
    pub record: T,
    pub issues: Vec<DecodeIssue>,
}

impl<T> Decoded<T> {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Mapping between one entity and its tab.
pub trait RowCodec: Sized + Clone + Send + Sync + 'static {
    /// Tab name.
    const SHEET: &'static str;
    /// Entity name used in logs and not-found errors.
    const ENTITY: &'static str;
    /// Data columns in persisted order; column A is always `id`.
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> DbId;

    /// Cells in [`Self::COLUMNS`] order. `None` fields become empty cells.
    fn encode(&self) -> Vec<String>;

    fn decode(row: &mut RowReader<'_>) -> Self;
}

/// Decode `cells` (data columns only) into a `T`.
pub fn decode_row<T: RowCodec>(cells: &[String], fallback: TimestampFallback) -> Decoded<T> {
    let mut reader = RowReader::new(T::COLUMNS, cells, fallback);
    let record = T::decode(&mut reader);
    reader.finish(record)
}

/// Parse a key cell. Blank, non-numeric and non-positive cells are not keys.
pub fn parse_id(cell: &str) -> Option<DbId> {
    parse_int(cell).filter(|id| *id > 0)
}

fn parse_int(cell: &str) -> Option<i64> {
    let cell = cell.trim();
    if let Ok(n) = cell.parse::<i64>() {
        return Some(n);
    }
    // Cells typed into the sheet by hand sometimes come back as `3.0`.
    cell.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite() && f.fract() == 0.0)
        .map(|f| f as i64)
}

fn parse_timestamp(cell: &str) -> Option<Timestamp> {
    let cell = cell.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(cell) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(cell, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(cell, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Typed, column-addressed access to one row's cells.
pub struct RowReader<'a> {
    columns: &'static [&'static str],
    cells: &'a [String],
    fallback: TimestampFallback,
    issues: Vec<DecodeIssue>,
}

impl<'a> RowReader<'a> {
    pub fn new(
        columns: &'static [&'static str],
        cells: &'a [String],
        fallback: TimestampFallback,
    ) -> Self {
        Self {
            columns,
            cells,
            fallback,
            issues: Vec::new(),
        }
    }

    fn raw(&self, column: &'static str) -> &'a str {
        debug_assert!(
            self.columns.contains(&column),
            "column {column} is not declared"
        );
        let cells = self.cells;
        self.columns
            .iter()
            .position(|c| *c == column)
            .and_then(|i| cells.get(i))
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    fn note(&mut self, column: &'static str, raw: &str, substitute: Substitute) {
        self.issues.push(DecodeIssue {
            column,
            raw: raw.to_string(),
            substitute,
        });
    }

    pub fn text(&mut self, column: &'static str) -> String {
        self.raw(column).to_string()
    }

    /// Blank cells read as `None`.
    pub fn opt_text(&mut self, column: &'static str) -> Option<String> {
        let raw = self.raw(column);
        (!raw.trim().is_empty()).then(|| raw.to_string())
    }

    /// Blank cells read as `0`; non-numeric cells read as `0` with an issue.
    pub fn int(&mut self, column: &'static str) -> i64 {
        let raw = self.raw(column);
        if raw.trim().is_empty() {
            return 0;
        }
        parse_int(raw).unwrap_or_else(|| {
            self.note(column, raw, Substitute::Zero);
            0
        })
    }

    /// Blank cells read as `None`; non-numeric cells read as `None` with an issue.
    pub fn opt_int(&mut self, column: &'static str) -> Option<i64> {
        let raw = self.raw(column);
        if raw.trim().is_empty() {
            return None;
        }
        let parsed = parse_int(raw);
        if parsed.is_none() {
            self.note(column, raw, Substitute::Null);
        }
        parsed
    }

    /// Required timestamp. Blank or malformed cells fall back according to
    /// the policy and are always reported.
    pub fn timestamp(&mut self, column: &'static str) -> Timestamp {
        let raw = self.raw(column);
        if let Some(ts) = parse_timestamp(raw) {
            return ts;
        }
        match self.fallback {
            TimestampFallback::Now => {
                self.note(column, raw, Substitute::Now);
                Utc::now()
            }
            TimestampFallback::UnixEpoch => {
                self.note(column, raw, Substitute::UnixEpoch);
                DateTime::<Utc>::UNIX_EPOCH
            }
        }
    }

    pub fn opt_timestamp(&mut self, column: &'static str) -> Option<Timestamp> {
        let raw = self.raw(column);
        if raw.trim().is_empty() {
            return None;
        }
        let parsed = parse_timestamp(raw);
        if parsed.is_none() {
            self.note(column, raw, Substitute::Null);
        }
        parsed
    }

    /// A `FromStr` value such as a status enum. Blank cells read as the
    /// default silently; unknown values read as the default with an issue.
    pub fn parsed<E: FromStr + Default>(&mut self, column: &'static str) -> E {
        let raw = self.raw(column);
        if raw.trim().is_empty() {
            return E::default();
        }
        raw.parse().unwrap_or_else(|_| {
            self.note(column, raw, Substitute::Default);
            E::default()
        })
    }

    /// A JSON-encoded cell. Blank cells read as the default silently.
    pub fn json<J: DeserializeOwned + Default>(&mut self, column: &'static str) -> J {
        let raw = self.raw(column);
        if raw.trim().is_empty() {
            return J::default();
        }
        serde_json::from_str(raw).unwrap_or_else(|_| {
            self.note(column, raw, Substitute::Default);
            J::default()
        })
    }

    pub fn finish<T>(self, record: T) -> Decoded<T> {
        Decoded {
            record,
            issues: self.issues,
        }
    }
}

// ---------------------------------------------------------------------------
// Encoding helpers
// ---------------------------------------------------------------------------

pub fn encode_int(value: i64) -> String {
    value.to_string()
}

pub fn encode_opt_int(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn encode_opt_text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// RFC 3339 with as many fractional digits as needed, so values round-trip.
pub fn encode_timestamp(value: &Timestamp) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub fn encode_opt_timestamp(value: Option<&Timestamp>) -> String {
    value.map(encode_timestamp).unwrap_or_default()
}

pub fn encode_json<J: Serialize>(value: &J) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
