use crate::config::Config;
use crate::docs::{
    DocumentationStatus, NormalizeReport, apply_documentation_status, documentation_status,
    normalize_docs,
};
use crate::init::{InitOutcome, default_tracker, init_tracker};
use crate::reader::TrackerReader;
use crate::scanner::Scanner;
use crate::writer::{TrackerWriter, WriteOutcome};
use crate::{Error, Result};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use tracksync_core::{normalize_path, resolve_in_root};
use tracksync_engine::{
    MergeReport, ValidationIssue, build_structure, merge_scan, validate, validate_section,
};
use tracksync_types::{
    KEY_PROJECT_STRUCTURE, KEY_SOURCE_CODE, KEY_TESTS, ScannedFile, TrackerDocument,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    /// Write the merged tracker when it changed
    Write,
    /// Report only
    DryRun,
    /// Report only; the caller fails on drift
    Check,
}

#[derive(Debug, Clone, Serialize)]
pub struct SyncOutcome {
    pub tracker_path: PathBuf,
    pub mode: SyncMode,
    pub scanned_files: usize,
    pub report: MergeReport,
    pub documentation: Option<DocumentationStatus>,
    /// The merged document differs from the one on disk
    pub changed: bool,
    pub written: bool,
}

impl SyncOutcome {
    pub fn ensure_in_sync(&self) -> Result<()> {
        if self.changed {
            Err(Error::DriftDetected(self.tracker_path.clone()))
        } else {
            Ok(())
        }
    }
}

/// Runs the tracker pipeline for one project root:
/// read, scan, merge, derived sections, validate, write.
///
/// Every stage runs against an in-memory copy; the file on disk is only
/// replaced after all of them succeed.
pub struct SyncService {
    root: PathBuf,
    config: Config,
    today: NaiveDate,
}

impl SyncService {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
            today: Local::now().date_naive(),
        }
    }

    /// Pin the date used for `project.last_updated`
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tracker_path(&self) -> PathBuf {
        resolve_in_root(&self.root, &self.config.tracker_path)
    }

    pub fn docs_dir(&self) -> PathBuf {
        resolve_in_root(&self.root, &self.config.docs_dir)
    }

    pub fn load(&self) -> Result<TrackerDocument> {
        TrackerReader::read(&self.tracker_path())
    }

    pub fn scan(&self) -> Result<Vec<ScannedFile>> {
        let scanner = Scanner::new(&self.root, self.config.scan_spec());
        let files = scanner.scan()?.collect::<Result<Vec<_>>>()?;
        Ok(files)
    }

    pub fn sync(&self, mode: SyncMode) -> Result<SyncOutcome> {
        let tracker_path = self.tracker_path();

        let mut doc = TrackerReader::read(&tracker_path)?;
        tracing::info!(path = %tracker_path.display(), "tracker loaded");
        self.check_shape(&doc)?;
        let original = doc.clone();

        let scanned = self.scan()?;
        tracing::info!(files = scanned.len(), "working tree scanned");

        let report = merge_scan(&mut doc, &scanned, &self.config.merge_policy());
        tracing::info!(
            added = report.total_added(),
            updated = report.total_updated(),
            stale = report.total_stale(),
            "scan merged"
        );

        let documentation = if self.config.track_documentation {
            let status = documentation_status(&self.docs_dir())?;
            apply_documentation_status(&mut doc, &status);
            Some(status)
        } else {
            None
        };

        if self.config.project_structure {
            self.apply_structure(&mut doc)?;
        }

        let changed = doc != original;
        if changed && self.config.touch_last_updated {
            doc.set_last_updated(self.today);
        }

        let issues = validate(&doc);
        if !issues.is_empty() {
            return Err(Error::Validation(issues));
        }

        let written = match mode {
            SyncMode::Write if changed => {
                TrackerWriter::write(&tracker_path, &doc)? == WriteOutcome::Written
            }
            _ => false,
        };
        if written {
            tracing::info!(path = %tracker_path.display(), "tracker written");
        } else {
            tracing::info!(changed, ?mode, "tracker not written");
        }

        Ok(SyncOutcome {
            tracker_path,
            mode,
            scanned_files: scanned.len(),
            report,
            documentation,
            changed,
            written,
        })
    }

    /// Reject a tracker whose sections the merge would have to replace
    fn check_shape(&self, doc: &TrackerDocument) -> Result<()> {
        let mut issues = validate(doc);
        for section in &self.config.sections {
            if section.name != KEY_SOURCE_CODE && section.name != KEY_TESTS {
                issues.extend(validate_section(doc, &section.name));
            }
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(issues))
        }
    }

    fn apply_structure(&self, doc: &mut TrackerDocument) -> Result<()> {
        let paths = Scanner::new(&self.root, self.config.scan_spec())
            .walk()?
            .map(|file| file.map(|f| f.rel_path))
            .collect::<Result<Vec<String>>>()?;
        let structure = build_structure(paths.iter().map(String::as_str));
        doc.as_mapping_mut()
            .insert(KEY_PROJECT_STRUCTURE.into(), Value::Mapping(structure));
        Ok(())
    }

    /// Schema issues of the tracker on disk
    pub fn validate(&self) -> Result<Vec<ValidationIssue>> {
        Ok(validate(&self.load()?))
    }

    pub fn init(&self, force: bool) -> Result<InitOutcome> {
        let project_name = normalize_path(&self.root)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("project")
            .to_string();
        let doc = default_tracker(&project_name, &self.config.python_version, self.today);
        init_tracker(&self.tracker_path(), &doc, force)
    }

    pub fn documentation_status(&self) -> Result<DocumentationStatus> {
        documentation_status(&self.docs_dir())
    }

    /// Normalize generated docs under `dir`, or the configured docs dir
    pub fn normalize_docs(&self, dir: Option<&Path>) -> Result<NormalizeReport> {
        let dir = match dir {
            Some(dir) => resolve_in_root(&self.root, dir),
            None => self.docs_dir(),
        };
        normalize_docs(&dir)
    }
}
