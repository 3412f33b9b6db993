use crate::{Error, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracksync_types::TrackerDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The file already had the rendered content
    Unchanged,
}

/// Serializes the tracker back to disk.
///
/// Output is block-style YAML in the document's own key order. The new
/// content goes to a temp file next to the target and is renamed over it,
/// so a failed or concurrent write never leaves a truncated tracker.
pub struct TrackerWriter;

impl TrackerWriter {
    pub fn render(doc: &TrackerDocument) -> Result<String> {
        serde_yaml::to_string(doc.as_mapping())
            .map_err(|err| Error::Write(format!("cannot serialize tracker: {}", err)))
    }

    pub fn write(path: &Path, doc: &TrackerDocument) -> Result<WriteOutcome> {
        let rendered = Self::render(doc)?;

        if let Ok(existing) = std::fs::read_to_string(path)
            && existing == rendered
        {
            return Ok(WriteOutcome::Unchanged);
        }

        let write_err = |err: std::io::Error| Error::Write(format!("{}: {}", path.display(), err));

        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(write_err)?;

        let mut temp = NamedTempFile::new_in(parent).map_err(write_err)?;
        temp.write_all(rendered.as_bytes()).map_err(write_err)?;
        if let Some(permissions) = target_permissions(path)? {
            temp.as_file().set_permissions(permissions).map_err(write_err)?;
        }
        temp.as_file().sync_all().map_err(write_err)?;
        temp.persist(path).map_err(|err| write_err(err.error))?;

        tracing::info!(path = %path.display(), "tracker written");
        Ok(WriteOutcome::Written)
    }
}

/// Mode for the replacement file: the tracker's current one, or a regular
/// world-readable file when it does not exist yet.
fn target_permissions(path: &Path) -> Result<Option<std::fs::Permissions>> {
    match std::fs::metadata(path) {
        Ok(metadata) => Ok(Some(metadata.permissions())),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(default_permissions()),
        Err(err) => Err(Error::Write(format!("{}: {}", path.display(), err))),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<std::fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<std::fs::Permissions> {
    None
}
