use std::fmt;

/// Result type for corexia-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Types layer error (decode/validation)
    Types(corexia_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP transport error
    Http(reqwest::Error),

    /// API returned a non-success status
    Api { status: u16, endpoint: String },

    /// State store error
    State(String),

    /// Authentication failed
    Auth(String),

    /// Inference run rejected
    Inference(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Types(err) => write!(f, "Types error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Api { status, endpoint } => {
                write!(f, "API error: {} returned HTTP {}", endpoint, status)
            }
            Error::State(msg) => write!(f, "State store error: {}", msg),
            Error::Auth(msg) => write!(f, "Authentication error: {}", msg),
            Error::Inference(msg) => write!(f, "Inference error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Types(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Http(err) => Some(err),
            Error::Config(_)
            | Error::Api { .. }
            | Error::State(_)
            | Error::Auth(_)
            | Error::Inference(_) => None,
        }
    }
}

impl From<corexia_types::Error> for Error {
    fn from(err: corexia_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::State(err.to_string())
    }
}
