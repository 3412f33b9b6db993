use crate::scanner::local_date;
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::Serialize;
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use tracksync_engine::docs::is_normalized_doc;
use tracksync_engine::normalize_text;
use tracksync_types::{KEY_DOCUMENTATION, TrackerDocument, format_date};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentationStatus {
    pub generated: bool,
    pub last_updated: Option<NaiveDate>,
}

/// Inspect the generated documentation directory.
///
/// Docs count as generated when the directory holds at least one regular
/// file directly; the directory's own mtime is the update date.
pub fn documentation_status(docs_dir: &Path) -> Result<DocumentationStatus> {
    if !docs_dir.exists() {
        return Ok(DocumentationStatus {
            generated: false,
            last_updated: None,
        });
    }

    let scan_err = |err: std::io::Error| Error::Scan(format!("{}: {}", docs_dir.display(), err));

    let mut generated = false;
    for entry in std::fs::read_dir(docs_dir).map_err(scan_err)? {
        let entry = entry.map_err(scan_err)?;
        if entry.file_type().map_err(scan_err)?.is_file() {
            generated = true;
            break;
        }
    }

    let last_updated = if generated {
        let modified = std::fs::metadata(docs_dir)
            .and_then(|m| m.modified())
            .map_err(scan_err)?;
        Some(local_date(modified))
    } else {
        None
    };

    Ok(DocumentationStatus {
        generated,
        last_updated,
    })
}

/// Record documentation status in the tracker.
///
/// A missing `documentation` section is only created once docs exist;
/// otherwise the tracker is left as it is. New sections get the
/// `generated`, `last_updated`, `tool` keys in that order.
pub fn apply_documentation_status(doc: &mut TrackerDocument, status: &DocumentationStatus) {
    if !doc.contains_key(KEY_DOCUMENTATION) && !status.generated {
        return;
    }

    let section = doc.section_mut(KEY_DOCUMENTATION);
    for (key, default) in [
        ("generated", Value::Bool(false)),
        ("last_updated", Value::String(String::new())),
        ("tool", Value::String(String::new())),
    ] {
        if !section.contains_key(key) {
            section.insert(key.into(), default);
        }
    }

    section.insert("generated".into(), Value::Bool(status.generated));
    if let Some(date) = status.last_updated {
        section.insert("last_updated".into(), Value::String(format_date(date)));
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NormalizeReport {
    pub checked: usize,
    pub rewritten: Vec<PathBuf>,
}

/// Normalize line endings and trailing whitespace of generated HTML/JS files
pub fn normalize_docs(dir: &Path) -> Result<NormalizeReport> {
    if !dir.is_dir() {
        return Err(Error::Scan(format!("not a directory: {}", dir.display())));
    }

    let mut report = NormalizeReport::default();
    for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|err| Error::Scan(err.to_string()))?;
        if !entry.file_type().is_file() || !is_normalized_doc(entry.path()) {
            continue;
        }

        report.checked += 1;
        let path = entry.path();
        let content = std::fs::read(path)?;
        let normalized = normalize_text(&content);
        if normalized != content {
            std::fs::write(path, &normalized)
                .map_err(|err| Error::Write(format!("{}: {}", path.display(), err)))?;
            tracing::debug!(path = %path.display(), "normalized");
            report.rewritten.push(path.to_path_buf());
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::TrackerReader;
    use tempfile::TempDir;

    const TRACKER: &str = "project: {name: demo, version: 0.1.0}\nsource_code: {}\ntests: {}\n";

    #[test]
    fn test_missing_docs_dir() {
        let temp = TempDir::new().unwrap();
        let status = documentation_status(&temp.path().join("docs")).unwrap();
        assert!(!status.generated);
        assert_eq!(status.last_updated, None);
    }

    #[test]
    fn test_docs_dir_with_file() {
        let temp = TempDir::new().unwrap();
        let docs = temp.path().join("docs");
        std::fs::create_dir(&docs).unwrap();
        std::fs::write(docs.join("index.html"), "test").unwrap();

        let status = documentation_status(&docs).unwrap();
        assert!(status.generated);
        assert!(status.last_updated.is_some());
    }

    #[test]
    fn test_empty_docs_dir_is_not_generated() {
        let temp = TempDir::new().unwrap();
        let docs = temp.path().join("docs");
        std::fs::create_dir_all(docs.join("sub")).unwrap();

        assert!(!documentation_status(&docs).unwrap().generated);
    }

    #[test]
    fn test_apply_creates_section_when_generated() {
        let mut doc = TrackerReader::parse(TRACKER).unwrap();
        let status = DocumentationStatus {
            generated: true,
            last_updated: NaiveDate::from_ymd_opt(2025, 3, 27),
        };

        apply_documentation_status(&mut doc, &status);

        let section = doc.section("documentation").unwrap();
        assert_eq!(section.get("generated"), Some(&Value::Bool(true)));
        assert_eq!(section.get("last_updated").and_then(Value::as_str), Some("2025-03-27"));
        assert_eq!(section.get("tool").and_then(Value::as_str), Some(""));
    }

    #[test]
    fn test_apply_without_docs_leaves_tracker_alone() {
        let mut doc = TrackerReader::parse(TRACKER).unwrap();
        let before = doc.clone();
        let status = DocumentationStatus {
            generated: false,
            last_updated: None,
        };

        apply_documentation_status(&mut doc, &status);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_apply_resets_generated_flag() {
        let mut doc = TrackerReader::parse(
            "project: {name: demo, version: 0.1.0}\nsource_code: {}\ntests: {}\n\
             documentation: {generated: true, last_updated: '2025-01-01', tool: pdoc}\n",
        )
        .unwrap();
        let status = DocumentationStatus {
            generated: false,
            last_updated: None,
        };

        apply_documentation_status(&mut doc, &status);

        let section = doc.section("documentation").unwrap();
        assert_eq!(section.get("generated"), Some(&Value::Bool(false)));
        assert_eq!(section.get("last_updated").and_then(Value::as_str), Some("2025-01-01"));
        assert_eq!(section.get("tool").and_then(Value::as_str), Some("pdoc"));
    }

    #[test]
    fn test_normalize_docs_only_touches_html_and_js() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("index.html"), "Line1\r\nLine2\r\n").unwrap();
        std::fs::write(temp.path().join("search.js"), "Line1\nLine2").unwrap();
        std::fs::write(temp.path().join("notes.md"), "Line1\r\n").unwrap();

        let report = normalize_docs(temp.path()).unwrap();

        assert_eq!(report.checked, 2);
        assert_eq!(report.rewritten.len(), 2);
        assert_eq!(
            std::fs::read_to_string(temp.path().join("index.html")).unwrap(),
            "Line1\nLine2\n"
        );
        assert_eq!(
            std::fs::read_to_string(temp.path().join("search.js")).unwrap(),
            "Line1\nLine2\n"
        );
        assert_eq!(
            std::fs::read_to_string(temp.path().join("notes.md")).unwrap(),
            "Line1\r\n"
        );
    }
}
