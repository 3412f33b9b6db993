use crate::{Error, FileStatus, Result};
use chrono::NaiveDate;
use serde_yaml::{Mapping, Value};

/// Date format used for every date field in the tracker
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const KEY_PATH: &str = "path";
pub const KEY_STATUS: &str = "status";
pub const KEY_COVERS: &str = "covers";
pub const KEY_LAST_MODIFIED: &str = "last_modified";

/// One tracked file inside a section's `files` list.
///
/// Entries in the tracker may carry keys this type does not know about.
/// Existing entries are therefore edited in place on their YAML mapping;
/// `FileEntry` is the typed view used for reading and for appending new
/// entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: String,
    pub status: Option<FileStatus>,
    pub covers: Option<String>,
    pub last_modified: Option<NaiveDate>,
}

impl FileEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: None,
            covers: None,
            last_modified: None,
        }
    }

    pub fn with_status(mut self, status: FileStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_covers(mut self, covers: impl Into<String>) -> Self {
        self.covers = Some(covers.into());
        self
    }

    pub fn with_last_modified(mut self, date: NaiveDate) -> Self {
        self.last_modified = Some(date);
        self
    }

    /// Decode an entry from its YAML form.
    ///
    /// `last_modified` values that are not valid dates are treated as absent
    /// so that a hand-edited tracker still loads; the next sync rewrites them.
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = value
            .as_mapping()
            .ok_or_else(|| Error::InvalidEntry("entry is not a mapping".to_string()))?;

        let path = map
            .get(KEY_PATH)
            .and_then(Value::as_str)
            .ok_or_else(|| Error::InvalidEntry("entry has no string `path`".to_string()))?
            .to_string();

        let status = map
            .get(KEY_STATUS)
            .and_then(Value::as_str)
            .map(FileStatus::from);

        let covers = map
            .get(KEY_COVERS)
            .and_then(Value::as_str)
            .map(str::to_string);

        let last_modified = map
            .get(KEY_LAST_MODIFIED)
            .and_then(Value::as_str)
            .and_then(|s| parse_date(s).ok());

        Ok(Self {
            path,
            status,
            covers,
            last_modified,
        })
    }

    /// Encode as a YAML mapping with keys in `path, status, covers,
    /// last_modified` order.
    pub fn to_value(&self) -> Value {
        let mut map = Mapping::new();
        map.insert(KEY_PATH.into(), Value::String(self.path.clone()));
        if let Some(status) = &self.status {
            map.insert(KEY_STATUS.into(), Value::String(status.to_string()));
        }
        if let Some(covers) = &self.covers {
            map.insert(KEY_COVERS.into(), Value::String(covers.clone()));
        }
        if let Some(date) = self.last_modified {
            map.insert(KEY_LAST_MODIFIED.into(), Value::String(format_date(date)));
        }
        Value::Mapping(map)
    }
}

/// Read the `path` of an entry without decoding the rest of it
pub fn entry_path(value: &Value) -> Option<&str> {
    value.as_mapping()?.get(KEY_PATH)?.as_str()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, DATE_FORMAT)?)
}
