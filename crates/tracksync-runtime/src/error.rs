use std::fmt;
use std::path::PathBuf;
use tracksync_engine::ValidationIssue;

/// Result type for tracksync-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Tracker is not valid YAML or lacks required sections
    Parse(String),

    /// Tracker file does not exist
    TrackerNotFound(PathBuf),

    /// Working tree could not be walked
    Scan(String),

    /// Tracker could not be written
    Write(String),

    /// Merged tracker violates the schema
    Validation(Vec<ValidationIssue>),

    /// Tracker differs from the working tree (check mode)
    DriftDetected(PathBuf),

    /// Configuration error
    Config(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
            Error::TrackerNotFound(path) => write!(
                f,
                "Tracker not found: {} (run 'tracksync init' to create it)",
                path.display()
            ),
            Error::Scan(msg) => write!(f, "Scan error: {}", msg),
            Error::Write(msg) => write!(f, "Write error: {}", msg),
            Error::Validation(issues) => {
                write!(f, "Validation failed: ")?;
                for (i, issue) in issues.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", issue)?;
                }
                Ok(())
            }
            Error::DriftDetected(path) => {
                write!(f, "Tracker is out of date: {}", path.display())
            }
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse(_)
            | Error::TrackerNotFound(_)
            | Error::Scan(_)
            | Error::Write(_)
            | Error::Validation(_)
            | Error::DriftDetected(_)
            | Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<tracksync_core::Error> for Error {
    fn from(err: tracksync_core::Error) -> Self {
        match err {
            tracksync_core::Error::Io(err) => Error::Io(err),
            tracksync_core::Error::Config(msg) => Error::Config(msg),
        }
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
