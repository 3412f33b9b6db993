use crate::coverage::infer_covered_source;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::{HashMap, HashSet};
use tracksync_types::entry::{KEY_LAST_MODIFIED, KEY_STATUS, entry_path};
use tracksync_types::{FileEntry, FileStatus, ScannedFile, TrackerDocument, format_date};

/// What to do with entries whose file no longer exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StalePolicy {
    /// Leave the entry untouched
    #[default]
    Keep,
    /// Mark the entry `Deprecated`
    Flag,
    /// Remove the entry
    Prune,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPolicy {
    pub name: String,
    /// Record the source file a test covers on new entries
    pub infer_covers: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePolicy {
    pub sections: Vec<SectionPolicy>,
    pub default_status: FileStatus,
    pub stale: StalePolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    pub section: String,
    pub added: Vec<String>,
    pub updated: Vec<String>,
    /// Missing files left in place
    pub stale: Vec<String>,
    pub flagged: Vec<String>,
    pub pruned: Vec<String>,
    pub unchanged: usize,
}

impl SectionReport {
    fn new(section: &str) -> Self {
        Self {
            section: section.to_string(),
            ..Default::default()
        }
    }

    pub fn has_changes(&self) -> bool {
        !(self.added.is_empty()
            && self.updated.is_empty()
            && self.flagged.is_empty()
            && self.pruned.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub sections: Vec<SectionReport>,
}

impl MergeReport {
    pub fn has_changes(&self) -> bool {
        self.sections.iter().any(SectionReport::has_changes)
    }

    pub fn section(&self, name: &str) -> Option<&SectionReport> {
        self.sections.iter().find(|s| s.section == name)
    }

    pub fn total_added(&self) -> usize {
        self.sections.iter().map(|s| s.added.len()).sum()
    }

    pub fn total_updated(&self) -> usize {
        self.sections.iter().map(|s| s.updated.len()).sum()
    }

    pub fn total_stale(&self) -> usize {
        self.sections
            .iter()
            .map(|s| s.stale.len() + s.flagged.len() + s.pruned.len())
            .sum()
    }
}

/// Fold scan results into the tracker.
///
/// Per configured section: unseen files are appended, entries whose file
/// date changed get a new `last_modified`, and entries whose file is gone
/// are handled by `policy.stale`. Entry order is never changed and unknown
/// keys on existing entries are left alone.
pub fn merge_scan(
    doc: &mut TrackerDocument,
    scanned: &[ScannedFile],
    policy: &MergePolicy,
) -> MergeReport {
    let mut report = MergeReport::default();

    for section in &policy.sections {
        let discovered: Vec<&ScannedFile> = scanned
            .iter()
            .filter(|f| f.section == section.name)
            .collect();

        if discovered.is_empty() && doc.files(&section.name).is_none() {
            report.sections.push(SectionReport::new(&section.name));
            continue;
        }

        let section_report = merge_section(doc.files_mut(&section.name), &discovered, section, policy);
        report.sections.push(section_report);
    }

    report
}

fn merge_section(
    files: &mut Vec<Value>,
    discovered: &[&ScannedFile],
    section: &SectionPolicy,
    policy: &MergePolicy,
) -> SectionReport {
    let mut report = SectionReport::new(&section.name);
    let by_path: HashMap<&str, &ScannedFile> =
        discovered.iter().map(|f| (f.path.as_str(), *f)).collect();

    let mut known: HashSet<String> = HashSet::new();
    let mut prune: HashSet<usize> = HashSet::new();

    for (index, entry) in files.iter_mut().enumerate() {
        let Some(path) = entry_path(entry).map(str::to_string) else {
            continue;
        };

        match by_path.get(path.as_str()) {
            Some(found) => {
                let date = format_date(found.modified);
                let current = entry
                    .get(KEY_LAST_MODIFIED)
                    .and_then(Value::as_str)
                    .map(str::to_string);
                if current.as_deref() == Some(date.as_str()) {
                    report.unchanged += 1;
                } else if let Some(map) = entry.as_mapping_mut() {
                    map.insert(KEY_LAST_MODIFIED.into(), Value::String(date));
                    report.updated.push(path.clone());
                }
            }
            None => match policy.stale {
                StalePolicy::Keep => {
                    tracing::warn!(section = %section.name, path = %path, "tracked file no longer exists");
                    report.stale.push(path.clone());
                }
                StalePolicy::Flag => {
                    let deprecated = FileStatus::Deprecated.to_string();
                    let already = entry.get(KEY_STATUS).and_then(Value::as_str)
                        == Some(deprecated.as_str());
                    if already {
                        report.stale.push(path.clone());
                    } else if let Some(map) = entry.as_mapping_mut() {
                        map.insert(KEY_STATUS.into(), Value::String(deprecated));
                        report.flagged.push(path.clone());
                    }
                }
                StalePolicy::Prune => {
                    prune.insert(index);
                    report.pruned.push(path.clone());
                }
            },
        }

        known.insert(path);
    }

    if !prune.is_empty() {
        let mut index = 0;
        files.retain(|_| {
            let keep = !prune.contains(&index);
            index += 1;
            keep
        });
    }

    for found in discovered {
        if !known.insert(found.path.clone()) {
            continue;
        }

        let mut entry = FileEntry::new(found.path.clone()).with_status(policy.default_status.clone());
        if section.infer_covers {
            entry = entry.with_covers(infer_covered_source(&found.path));
        }
        entry = entry.with_last_modified(found.modified);

        tracing::debug!(section = %section.name, path = %found.path, "adding tracker entry");
        files.push(entry.to_value());
        report.added.push(found.path.clone());
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn doc(yaml: &str) -> TrackerDocument {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        TrackerDocument::new(value.as_mapping().unwrap().clone())
    }

    fn scanned(section: &str, path: &str, modified: NaiveDate) -> ScannedFile {
        ScannedFile {
            section: section.to_string(),
            path: path.to_string(),
            modified,
        }
    }

    fn policy(stale: StalePolicy) -> MergePolicy {
        MergePolicy {
            sections: vec![
                SectionPolicy {
                    name: "source_code".to_string(),
                    infer_covers: false,
                },
                SectionPolicy {
                    name: "tests".to_string(),
                    infer_covers: true,
                },
            ],
            default_status: FileStatus::Active,
            stale,
        }
    }

    const TRACKER: &str = r#"
project:
  name: demo
  version: 0.1.0
source_code:
  files:
  - path: src/main.py
    status: Created
    last_modified: '2024-01-01'
    owner: alice
  - path: src/old.py
    status: Active
    last_modified: '2023-06-01'
tests:
  files: []
"#;

    #[test]
    fn test_new_file_is_appended_with_defaults() {
        let mut tracker = doc(TRACKER);
        let scan = vec![
            scanned("source_code", "src/main.py", date(2024, 1, 1)),
            scanned("source_code", "src/old.py", date(2023, 6, 1)),
            scanned("source_code", "src/new.py", date(2024, 2, 2)),
        ];

        let report = merge_scan(&mut tracker, &scan, &policy(StalePolicy::Keep));

        let entries = tracker.entries("source_code");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].path, "src/new.py");
        assert_eq!(entries[2].status, Some(FileStatus::Active));
        assert_eq!(entries[2].last_modified, Some(date(2024, 2, 2)));
        assert_eq!(report.section("source_code").unwrap().added, vec!["src/new.py"]);
        assert_eq!(report.section("source_code").unwrap().unchanged, 2);
    }

    #[test]
    fn test_changed_file_updates_only_last_modified() {
        let mut tracker = doc(TRACKER);
        let scan = vec![
            scanned("source_code", "src/main.py", date(2024, 5, 5)),
            scanned("source_code", "src/old.py", date(2023, 6, 1)),
        ];

        let report = merge_scan(&mut tracker, &scan, &policy(StalePolicy::Keep));

        let entry = &tracker.files("source_code").unwrap()[0];
        let keys: Vec<&str> = entry
            .as_mapping()
            .unwrap()
            .keys()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(keys, vec!["path", "status", "last_modified", "owner"]);
        assert_eq!(entry.get("status").and_then(Value::as_str), Some("Created"));
        assert_eq!(entry.get("last_modified").and_then(Value::as_str), Some("2024-05-05"));
        assert_eq!(report.section("source_code").unwrap().updated, vec!["src/main.py"]);
    }

    #[test]
    fn test_stale_entry_kept_by_default() {
        let mut tracker = doc(TRACKER);
        let before = tracker.clone();
        let scan = vec![scanned("source_code", "src/main.py", date(2024, 1, 1))];

        let report = merge_scan(&mut tracker, &scan, &policy(StalePolicy::Keep));

        assert_eq!(tracker, before);
        assert_eq!(report.section("source_code").unwrap().stale, vec!["src/old.py"]);
        assert!(!report.has_changes());
    }

    #[test]
    fn test_stale_entry_flagged() {
        let mut tracker = doc(TRACKER);
        let scan = vec![scanned("source_code", "src/main.py", date(2024, 1, 1))];

        let report = merge_scan(&mut tracker, &scan, &policy(StalePolicy::Flag));

        let entries = tracker.entries("source_code");
        assert_eq!(entries[1].status, Some(FileStatus::Deprecated));
        assert_eq!(report.section("source_code").unwrap().flagged, vec!["src/old.py"]);

        // Flagging twice is a no-op
        let again = merge_scan(&mut tracker, &scan, &policy(StalePolicy::Flag));
        assert!(!again.has_changes());
    }

    #[test]
    fn test_stale_entry_pruned_preserves_order() {
        let mut tracker = doc(TRACKER);
        let scan = vec![
            scanned("source_code", "src/main.py", date(2024, 1, 1)),
            scanned("source_code", "src/z.py", date(2024, 1, 1)),
        ];

        merge_scan(&mut tracker, &scan, &policy(StalePolicy::Prune));

        assert_eq!(tracker.entry_paths("source_code"), vec!["src/main.py", "src/z.py"]);
    }

    #[test]
    fn test_empty_scan_leaves_entries_alone() {
        let mut tracker = doc(TRACKER);
        let before = tracker.clone();

        let report = merge_scan(&mut tracker, &[], &policy(StalePolicy::Keep));

        assert_eq!(tracker, before);
        assert_eq!(report.total_added(), 0);
        assert_eq!(report.total_updated(), 0);
    }

    #[test]
    fn test_tests_section_records_covers() {
        let mut tracker = doc(TRACKER);
        let scan = vec![scanned("tests", "tests/test_main.py", date(2024, 3, 3))];

        merge_scan(&mut tracker, &scan, &policy(StalePolicy::Keep));

        let entries = tracker.entries("tests");
        assert_eq!(entries[0].covers.as_deref(), Some("src/main.py"));
    }

    #[test]
    fn test_missing_files_list_is_created() {
        let mut tracker = doc("project: {name: demo}\nsource_code: {}\ntests: {}\n");
        let scan = vec![scanned("source_code", "src/a.py", date(2024, 1, 1))];

        merge_scan(&mut tracker, &scan, &policy(StalePolicy::Keep));

        assert_eq!(tracker.entry_paths("source_code"), vec!["src/a.py"]);
        assert!(tracker.files("tests").is_none());
    }
}
