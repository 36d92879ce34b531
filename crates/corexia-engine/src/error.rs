use std::fmt;

/// Result type for corexia-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Sort key is not declared by the list schema
    UnknownSortKey { key: String, valid: Vec<String> },

    /// Schema declares no sortable keys
    NoSortKeys,

    /// Schema declares no searchable fields
    NoSearchFields,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSortKey { key, valid } => {
                write!(f, "Unknown sort key '{}' (valid: {})", key, valid.join(", "))
            }
            Error::NoSortKeys => write!(f, "List schema declares no sortable keys"),
            Error::NoSearchFields => write!(f, "List schema declares no searchable fields"),
        }
    }
}

impl std::error::Error for Error {}
