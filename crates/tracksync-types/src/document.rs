use crate::entry::{FileEntry, entry_path, format_date};
use crate::{ProjectInfo, Result};
use chrono::NaiveDate;
use serde_yaml::{Mapping, Value};

pub const KEY_PROJECT: &str = "project";
pub const KEY_SOURCE_CODE: &str = "source_code";
pub const KEY_TESTS: &str = "tests";
pub const KEY_FILES: &str = "files";
pub const KEY_DOCUMENTATION: &str = "documentation";
pub const KEY_PROJECT_STRUCTURE: &str = "project_structure";
pub const KEY_LAST_UPDATED: &str = "last_updated";

/// Top-level keys every tracker must have
pub const REQUIRED_KEYS: [&str; 3] = [KEY_PROJECT, KEY_SOURCE_CODE, KEY_TESTS];

/// The whole tracker file.
///
/// Backed by an insertion-ordered YAML mapping so that keys the tool does not
/// know about survive a read/write cycle in their original position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackerDocument {
    root: Mapping,
}

impl TrackerDocument {
    pub fn new(root: Mapping) -> Self {
        Self { root }
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.root
    }

    pub fn as_mapping_mut(&mut self) -> &mut Mapping {
        &mut self.root
    }

    pub fn into_value(self) -> Value {
        Value::Mapping(self.root)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    /// Required top-level keys absent from this document
    pub fn missing_required_keys(&self) -> Vec<&'static str> {
        REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| !self.root.contains_key(*key))
            .collect()
    }

    pub fn project(&self) -> Result<ProjectInfo> {
        match self.root.get(KEY_PROJECT) {
            Some(value) => Ok(serde_yaml::from_value(value.clone())?),
            None => Ok(ProjectInfo::default()),
        }
    }

    pub fn section(&self, name: &str) -> Option<&Mapping> {
        self.root.get(name)?.as_mapping()
    }

    /// Section mapping, created at the end of the document if missing.
    ///
    /// A section that exists but is not a mapping (e.g. `tests: null`) is
    /// replaced in place by an empty mapping.
    pub fn section_mut(&mut self, name: &str) -> &mut Mapping {
        ensure_mapping(&mut self.root, name)
    }

    /// Raw `files` list of a section, if present
    pub fn files(&self, section: &str) -> Option<&Vec<Value>> {
        self.section(section)?.get(KEY_FILES)?.as_sequence()
    }

    /// Raw `files` list of a section, creating section and list if missing
    pub fn files_mut(&mut self, section: &str) -> &mut Vec<Value> {
        let section = self.section_mut(section);
        let needs_reset = !matches!(section.get(KEY_FILES), Some(Value::Sequence(_)));
        if needs_reset {
            section.insert(KEY_FILES.into(), Value::Sequence(Vec::new()));
        }
        match section.get_mut(KEY_FILES) {
            Some(Value::Sequence(seq)) => seq,
            _ => unreachable!("files list was just inserted"),
        }
    }

    /// Typed entries of a section; malformed entries are skipped
    pub fn entries(&self, section: &str) -> Vec<FileEntry> {
        self.files(section)
            .map(|files| {
                files
                    .iter()
                    .filter_map(|v| FileEntry::from_value(v).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn entry_paths(&self, section: &str) -> Vec<String> {
        self.files(section)
            .map(|files| {
                files
                    .iter()
                    .filter_map(entry_path)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Set `project.last_updated`, keeping the key's position if it exists
    pub fn set_last_updated(&mut self, date: NaiveDate) {
        self.section_mut(KEY_PROJECT)
            .insert(KEY_LAST_UPDATED.into(), Value::String(format_date(date)));
    }
}

impl From<Mapping> for TrackerDocument {
    fn from(root: Mapping) -> Self {
        Self::new(root)
    }
}

fn ensure_mapping<'a>(parent: &'a mut Mapping, key: &str) -> &'a mut Mapping {
    let needs_reset = !matches!(parent.get(key), Some(Value::Mapping(_)));
    if needs_reset {
        parent.insert(key.into(), Value::Mapping(Mapping::new()));
    }
    match parent.get_mut(key) {
        Some(Value::Mapping(map)) => map,
        _ => unreachable!("mapping was just inserted"),
    }
}
