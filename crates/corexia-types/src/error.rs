use std::fmt;

/// Result type for corexia-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Wire payload could not be decoded into a typed record
    Decode(DecodeError),

    /// Payload was not valid JSON
    Json(serde_json::Error),
}

/// A field-level decoding failure.
///
/// Produced at the data-source boundary when a wire payload does not
/// match the record schema. A missing or ill-typed field is always an
/// error; numeric fields are never defaulted to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    /// Record type being decoded, e.g. "dataset"
    pub record: &'static str,
    /// Field that failed, e.g. "samples_count"
    pub field: &'static str,
    /// What went wrong
    pub reason: DecodeReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeReason {
    Missing,
    ExpectedString,
    ExpectedNumber,
    ExpectedArray,
    InvalidDate(String),
}

impl DecodeError {
    pub fn new(record: &'static str, field: &'static str, reason: DecodeReason) -> Self {
        Self {
            record,
            field,
            reason,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            DecodeReason::Missing => {
                write!(f, "{}.{}: field is missing", self.record, self.field)
            }
            DecodeReason::ExpectedString => {
                write!(f, "{}.{}: expected a string", self.record, self.field)
            }
            DecodeReason::ExpectedNumber => {
                write!(f, "{}.{}: expected a number", self.record, self.field)
            }
            DecodeReason::ExpectedArray => {
                write!(f, "{}.{}: expected an array", self.record, self.field)
            }
            DecodeReason::InvalidDate(raw) => {
                write!(f, "{}.{}: invalid date '{}'", self.record, self.field, raw)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode(err) => write!(f, "Decode error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decode(_) => None,
            Error::Json(err) => Some(err),
        }
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
