use std::fmt;

/// Result type for tracksync-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types raised while interpreting tracker values
#[derive(Debug)]
pub enum Error {
    /// A file entry is not a mapping or lacks a string `path`
    InvalidEntry(String),

    /// A date field is not in `YYYY-MM-DD` form
    InvalidDate(chrono::ParseError),

    /// A typed view could not be decoded from the YAML value
    Decode(serde_yaml::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidEntry(msg) => write!(f, "Invalid file entry: {}", msg),
            Error::InvalidDate(err) => write!(f, "Invalid date: {}", err),
            Error::Decode(err) => write!(f, "Decode error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidEntry(_) => None,
            Error::InvalidDate(err) => Some(err),
            Error::Decode(err) => Some(err),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::InvalidDate(err)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Decode(err)
    }
}
