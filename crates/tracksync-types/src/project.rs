use serde::{Deserialize, Serialize};

/// Typed view of the tracker's `project` section.
///
/// Only used for reporting; the section itself stays a free-form mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
}
