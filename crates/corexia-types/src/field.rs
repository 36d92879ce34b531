use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;

/// The pipeline-facing value of a named record field.
///
/// List views only ever see records through these three shapes: text
/// compares lexicographically, numbers numerically, dates
/// chronologically. A list schema guarantees that a given sort key
/// always yields the same variant across a collection.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl FieldValue {
    /// Compare two field values under their field semantics.
    ///
    /// Returns `None` for cross-variant comparisons, which a validated
    /// schema makes unreachable; callers treat `None` as equal so an
    /// explicit tie-break still produces a total order.
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.cmp(b)),
            (FieldValue::Number(a), FieldValue::Number(b)) => Some(a.total_cmp(b)),
            (FieldValue::Date(a), FieldValue::Date(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Lowercased text content, for case-insensitive search.
    ///
    /// Numbers and dates are not searchable fields; they render through
    /// formatters instead.
    pub fn search_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.to_lowercase()),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<u64> for FieldValue {
    fn from(n: u64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

/// A resource item displayed in a list view.
///
/// Records expose named fields to the pipeline and nothing else; each
/// implementor declares its field names as associated constants on the
/// concrete type.
pub trait Record: Clone {
    /// Stable identifier, also the deterministic sort tie-break.
    fn id(&self) -> &str;

    /// Value of a named field, or `None` if the record has no such field.
    fn field(&self, key: &str) -> Option<FieldValue>;
}
