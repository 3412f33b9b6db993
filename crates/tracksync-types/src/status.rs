use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a tracked file.
///
/// The set is open: trackers are edited by hand, so any string that is not
/// one of the known values round-trips through `Other` unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FileStatus {
    Created,
    #[default]
    Active,
    Deprecated,
    Other(String),
}

impl FileStatus {
    pub fn as_str(&self) -> &str {
        match self {
            FileStatus::Created => "Created",
            FileStatus::Active => "Active",
            FileStatus::Deprecated => "Deprecated",
            FileStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Created" => FileStatus::Created,
            "Active" => FileStatus::Active,
            "Deprecated" => FileStatus::Deprecated,
            other => FileStatus::Other(other.to_string()),
        })
    }
}

impl From<&str> for FileStatus {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(status) => status,
            Err(never) => match never {},
        }
    }
}

impl Serialize for FileStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FileStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(FileStatus::from(s.as_str()))
    }
}
