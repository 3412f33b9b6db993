use crate::writer::TrackerWriter;
use crate::Result;
use chrono::NaiveDate;
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracksync_types::{TrackerDocument, format_date};

pub const DEFAULT_DESCRIPTION: &str = "Python project using uv package manager";

pub const DEFAULT_CONFIGURATION_FILES: [&str; 5] = [
    "pyproject.toml",
    "README.md",
    ".pre-commit-config.yaml",
    "ruff.toml",
    "LICENSE",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Overwritten,
    AlreadyExists,
}

fn mapping<const N: usize>(pairs: [(&str, Value); N]) -> Value {
    let mut map = Mapping::new();
    for (key, value) in pairs {
        map.insert(key.into(), value);
    }
    Value::Mapping(map)
}

fn empty_files() -> Value {
    mapping([("files", Value::Sequence(Vec::new()))])
}

/// Tracker for a project that has none yet
pub fn default_tracker(project_name: &str, python_version: &str, today: NaiveDate) -> TrackerDocument {
    let configuration_files = DEFAULT_CONFIGURATION_FILES
        .iter()
        .map(|f| Value::String(f.to_string()))
        .collect();

    let root = mapping([
        (
            "project",
            mapping([
                ("name", project_name.into()),
                ("version", "0.1.0".into()),
                ("description", DEFAULT_DESCRIPTION.into()),
                ("last_updated", format_date(today).into()),
            ]),
        ),
        (
            "environment",
            mapping([
                ("python_version", python_version.into()),
                ("package_manager", "uv".into()),
                ("virtual_env", ".venv".into()),
            ]),
        ),
        (
            "dependencies",
            mapping([("development", Value::Sequence(Vec::new()))]),
        ),
        (
            "documentation",
            mapping([
                ("generated", Value::Bool(false)),
                ("last_updated", "".into()),
                ("tool", "".into()),
            ]),
        ),
        (
            "configuration_files",
            mapping([("files", Value::Sequence(configuration_files))]),
        ),
        ("source_code", empty_files()),
        ("tests", empty_files()),
    ]);

    match root {
        Value::Mapping(map) => TrackerDocument::new(map),
        _ => unreachable!("mapping() always returns a mapping"),
    }
}

/// Write `doc` to `path` unless a tracker already exists there.
pub fn init_tracker(path: &Path, doc: &TrackerDocument, force: bool) -> Result<InitOutcome> {
    let existed = path.exists();
    if existed && !force {
        tracing::info!(path = %path.display(), "tracker already exists");
        return Ok(InitOutcome::AlreadyExists);
    }

    TrackerWriter::write(path, doc)?;
    tracing::info!(path = %path.display(), "tracker initialized");

    Ok(if existed {
        InitOutcome::Overwritten
    } else {
        InitOutcome::Created
    })
}
