use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A file discovered in the working tree for a tracked section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedFile {
    /// Tracker section the file belongs to (`source_code`, `tests`, ...)
    pub section: String,
    /// Path relative to the project root, `/`-separated
    pub path: String,
    /// Local calendar date of the file's last modification
    pub modified: NaiveDate,
}
