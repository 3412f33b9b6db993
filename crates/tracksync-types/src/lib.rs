//! Tracker data model shared by every tracksync crate.

pub mod document;
pub mod entry;
pub mod error;
mod project;
mod scan;
mod status;

pub use document::{
    KEY_DOCUMENTATION, KEY_FILES, KEY_PROJECT, KEY_PROJECT_STRUCTURE, KEY_SOURCE_CODE, KEY_TESTS,
    REQUIRED_KEYS, TrackerDocument,
};
pub use entry::{DATE_FORMAT, FileEntry, format_date, parse_date};
pub use error::{Error, Result};
pub use project::ProjectInfo;
pub use scan::ScannedFile;
pub use status::FileStatus;
