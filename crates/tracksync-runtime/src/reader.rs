use crate::{Error, Result};
use serde_yaml::Value;
use std::path::Path;
use tracksync_types::TrackerDocument;

/// Loads the tracker file. Never writes.
pub struct TrackerReader;

impl TrackerReader {
    pub fn read(path: &Path) -> Result<TrackerDocument> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::TrackerNotFound(path.to_path_buf()));
            }
            Err(err) => return Err(Error::Io(err)),
        };

        Self::parse(&content)
            .map_err(|err| match err {
                Error::Parse(msg) => Error::Parse(format!("{}: {}", path.display(), msg)),
                other => other,
            })
    }

    /// Parse tracker text, requiring a mapping root with the `project`,
    /// `source_code` and `tests` keys
    pub fn parse(content: &str) -> Result<TrackerDocument> {
        let value: Value =
            serde_yaml::from_str(content).map_err(|err| Error::Parse(err.to_string()))?;

        let root = match value {
            Value::Mapping(map) => map,
            Value::Null => return Err(Error::Parse("document is empty".to_string())),
            _ => return Err(Error::Parse("document root must be a mapping".to_string())),
        };

        let doc = TrackerDocument::new(root);
        let missing = doc.missing_required_keys();
        if !missing.is_empty() {
            return Err(Error::Parse(format!(
                "missing required keys: {}",
                missing.join(", ")
            )));
        }

        Ok(doc)
    }
}
