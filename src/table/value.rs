//! Row identifiers and cell values.
//!
//! Rows expose their fields as [`CellValue`]s, looked up by column key.
//! Cell values carry a total order so that any column can be sorted,
//! including columns that mix value kinds.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// A stable unique identifier for a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowId {
    /// Integer identifier.
    Int(i64),
    /// String identifier.
    Str(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(id) => write!(f, "{}", id),
            RowId::Str(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RowId {
    fn from(id: i64) -> Self {
        RowId::Int(id)
    }
}

impl From<&str> for RowId {
    fn from(id: &str) -> Self {
        RowId::Str(id.to_string())
    }
}

impl From<String> for RowId {
    fn from(id: String) -> Self {
        RowId::Str(id)
    }
}

/// The raw value of one cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// No value (missing field or unknown key).
    Empty,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Text value. Date-like text sorts chronologically.
    Text(String),
}

impl CellValue {
    /// Check if the cell has no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Get the text content, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Check whether the display string contains `query_lower`.
    ///
    /// `query_lower` must already be lowercased. Empty cells never match.
    pub fn matches(&self, query_lower: &str) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Text(s) => s.to_lowercase().contains(query_lower),
            other => other.to_string().to_lowercase().contains(query_lower),
        }
    }

    /// Compare two cell values under the table's total order.
    ///
    /// Values are ranked by class first: empty, bool, number, date, text.
    /// Within a class, numbers compare numerically, dates chronologically
    /// and text case-insensitively.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        let a = SortKey::from(self);
        let b = SortKey::from(other);
        a.rank().cmp(&b.rank()).then_with(|| a.cmp_same_class(&b))
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Int(n) => write!(f, "{}", n),
            CellValue::Float(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Int(n as i64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

/// Normalized comparison key for a cell.
enum SortKey {
    Empty,
    Bool(bool),
    Number(f64),
    Date(i64),
    Text(String),
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Empty => 0,
            SortKey::Bool(_) => 1,
            SortKey::Number(_) => 2,
            SortKey::Date(_) => 3,
            SortKey::Text(_) => 4,
        }
    }

    fn cmp_same_class(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl From<&CellValue> for SortKey {
    fn from(value: &CellValue) -> Self {
        match value {
            CellValue::Empty => SortKey::Empty,
            CellValue::Bool(b) => SortKey::Bool(*b),
            CellValue::Int(n) => SortKey::Number(*n as f64),
            CellValue::Float(n) => SortKey::Number(*n),
            CellValue::Text(s) => match parse_date_millis(s) {
                Some(millis) => SortKey::Date(millis),
                None => SortKey::Text(s.to_lowercase()),
            },
        }
    }
}

/// Parse date-like text into milliseconds since the Unix epoch.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS` without offset
/// (read as UTC) and plain `YYYY-MM-DD` dates.
pub fn parse_date_millis(s: &str) -> Option<i64> {
    let s = s.trim();
    // Cheap reject before handing to chrono: dates start with a 4-digit year.
    if s.len() < 10 || !s.as_bytes()[..4].iter().all(u8::is_ascii_digit) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc().timestamp_millis());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}
