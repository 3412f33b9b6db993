use crate::pattern::{GlobPattern, IgnoreSet};
use crate::{Error, Result};
use chrono::{DateTime, Local, NaiveDate};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracksync_core::relative_slash_path;
use tracksync_types::ScannedFile;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone)]
pub struct SectionGlobs {
    pub section: String,
    pub patterns: Vec<GlobPattern>,
}

impl SectionGlobs {
    pub fn matches(&self, rel_path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(rel_path))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScanSpec {
    pub sections: Vec<SectionGlobs>,
    pub ignore: IgnoreSet,
}

/// A regular file found under the root that survived the ignore list
#[derive(Debug, Clone)]
pub struct WalkedFile {
    pub rel_path: String,
    pub modified: NaiveDate,
}

/// Walks the working tree and reports tracked files.
///
/// Iteration is lazy and sorted by file name within each directory, so two
/// scans of an unchanged tree yield the same sequence. Symlinks are never
/// followed or reported.
pub struct Scanner {
    root: PathBuf,
    spec: ScanSpec,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>, spec: ScanSpec) -> Self {
        Self {
            root: root.into(),
            spec,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Files matching any section glob, one item per matching section
    pub fn scan(&self) -> Result<impl Iterator<Item = Result<ScannedFile>> + '_> {
        let files = self.walk()?;
        Ok(files.flat_map(move |item| -> Vec<Result<ScannedFile>> {
            match item {
                Err(err) => vec![Err(err)],
                Ok(file) => self
                    .spec
                    .sections
                    .iter()
                    .filter(|s| s.matches(&file.rel_path))
                    .map(|s| {
                        Ok(ScannedFile {
                            section: s.section.clone(),
                            path: file.rel_path.clone(),
                            modified: file.modified,
                        })
                    })
                    .collect(),
            }
        }))
    }

    /// Every non-ignored regular file under the root
    pub fn walk(&self) -> Result<impl Iterator<Item = Result<WalkedFile>> + '_> {
        let root = self.checked_root()?;
        let ignore = &self.spec.ignore;
        let filter_root = root.clone();

        let entries = WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                if entry.depth() == 0 {
                    return true;
                }
                match relative_slash_path(&filter_root, entry.path()) {
                    Some(rel) => {
                        let ignored = ignore.is_ignored(&rel, entry.file_type().is_dir());
                        if ignored {
                            tracing::trace!(path = %rel, "ignored");
                        }
                        !ignored
                    }
                    None => false,
                }
            });

        Ok(entries.filter_map(move |entry| match entry {
            Err(err) => Some(Err(Error::Scan(format!(
                "{}: {}",
                err.path().unwrap_or(root.as_path()).display(),
                err
            )))),
            Ok(entry) => walked_file(&root, &entry).transpose(),
        }))
    }

    fn checked_root(&self) -> Result<PathBuf> {
        let root = self.root.canonicalize().map_err(|err| {
            Error::Scan(format!("cannot access {}: {}", self.root.display(), err))
        })?;
        if !root.is_dir() {
            return Err(Error::Scan(format!("not a directory: {}", root.display())));
        }
        Ok(root)
    }
}

fn walked_file(root: &Path, entry: &DirEntry) -> Result<Option<WalkedFile>> {
    if entry.path_is_symlink() {
        tracing::debug!(path = %entry.path().display(), "skipping symlink");
        return Ok(None);
    }
    if !entry.file_type().is_file() {
        return Ok(None);
    }
    let Some(rel_path) = relative_slash_path(root, entry.path()) else {
        tracing::debug!(path = %entry.path().display(), "skipping path outside project root");
        return Ok(None);
    };

    let modified = entry
        .metadata()
        .map_err(|err| Error::Scan(format!("{}: {}", entry.path().display(), err)))?
        .modified()
        .map_err(|err| Error::Scan(format!("{}: {}", entry.path().display(), err)))?;

    Ok(Some(WalkedFile {
        rel_path,
        modified: local_date(modified),
    }))
}

/// Calendar date of a filesystem timestamp in the local time zone
pub fn local_date(time: SystemTime) -> NaiveDate {
    DateTime::<Local>::from(time).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn scan_paths(root: &Path) -> Vec<(String, String)> {
        Scanner::new(root, Config::default().scan_spec())
            .scan()
            .unwrap()
            .map(|r| r.unwrap())
            .map(|f| (f.section, f.path))
            .collect()
    }

    #[test]
    fn test_scan_assigns_sections() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/main.py");
        touch(temp.path(), "src/agent/data_store.py");
        touch(temp.path(), "tests/test_main.py");
        touch(temp.path(), "README.md");

        assert_eq!(
            scan_paths(temp.path()),
            vec![
                ("source_code".to_string(), "src/agent/data_store.py".to_string()),
                ("source_code".to_string(), "src/main.py".to_string()),
                ("tests".to_string(), "tests/test_main.py".to_string()),
            ]
        );
    }

    #[test]
    fn test_scan_prunes_ignored_directories() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/main.py");
        touch(temp.path(), "src/__pycache__/main.py");
        touch(temp.path(), "src/pkg.egg-info/setup.py");
        touch(temp.path(), "src/build/gen.py");
        touch(temp.path(), ".venv/src/lib.py");

        let paths: Vec<String> = scan_paths(temp.path()).into_iter().map(|(_, p)| p).collect();
        assert_eq!(paths, vec!["src/main.py"]);
    }

    #[test]
    fn test_empty_tree_yields_nothing() {
        let temp = TempDir::new().unwrap();
        assert!(scan_paths(temp.path()).is_empty());
    }

    #[test]
    fn test_scan_is_restartable() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/b.py");
        touch(temp.path(), "src/a.py");

        let scanner = Scanner::new(temp.path(), Config::default().scan_spec());
        let first: Vec<_> = scanner.scan().unwrap().map(|r| r.unwrap()).collect();
        let second: Vec<_> = scanner.scan().unwrap().map(|r| r.unwrap()).collect();
        assert_eq!(first, second);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_skipped() {
        let temp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        touch(outside.path(), "secret.py");
        touch(temp.path(), "src/main.py");
        std::os::unix::fs::symlink(outside.path().join("secret.py"), temp.path().join("src/link.py"))
            .unwrap();
        std::os::unix::fs::symlink(outside.path(), temp.path().join("src/linked_dir")).unwrap();

        let paths: Vec<String> = scan_paths(temp.path()).into_iter().map(|(_, p)| p).collect();
        assert_eq!(paths, vec!["src/main.py"]);
    }

    #[test]
    fn test_missing_root_is_scan_error() {
        let temp = TempDir::new().unwrap();
        let scanner = Scanner::new(temp.path().join("missing"), ScanSpec::default());
        assert!(matches!(scanner.scan(), Err(Error::Scan(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_surfaces_scan_error() {
        use std::os::unix::fs::PermissionsExt;

        // root ignores directory permissions
        if unsafe { libc::geteuid() } == 0 {
            return;
        }

        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/main.py");
        touch(temp.path(), "src/locked/hidden.py");
        let locked = temp.path().join("src/locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let results: Vec<Result<ScannedFile>> = Scanner::new(temp.path(), Config::default().scan_spec())
            .scan()
            .unwrap()
            .collect();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(results.iter().any(|r| matches!(r, Err(Error::Scan(_)))));
        assert!(results.iter().any(|r| matches!(r, Ok(f) if f.path == "src/main.py")));
    }
}
