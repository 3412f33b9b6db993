use crate::pattern::{GlobPattern, IgnoreSet};
use crate::scanner::{ScanSpec, SectionGlobs};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracksync_engine::{MergePolicy, SectionPolicy, StalePolicy};
use tracksync_types::{FileStatus, KEY_SOURCE_CODE, KEY_TESTS};

/// File name of the optional per-project configuration
pub const CONFIG_FILE_NAME: &str = "tracksync.toml";

pub const DEFAULT_TRACKER_PATH: &str = ".github/project_tracker.yaml";

pub const DEFAULT_IGNORE: [&str; 7] = [
    ".git/",
    "__pycache__",
    ".venv",
    "*.pyc",
    "dist/",
    "build/",
    "*.egg-info/",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub name: String,
    pub globs: Vec<String>,
    #[serde(default)]
    pub infer_covers: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracker location, relative to the project root
    pub tracker_path: PathBuf,
    /// Generated documentation directory, relative to the project root
    pub docs_dir: PathBuf,
    pub ignore: Vec<String>,
    pub default_status: FileStatus,
    pub stale: StalePolicy,
    /// Maintain the `project_structure` section
    pub project_structure: bool,
    /// Maintain the `documentation` section
    pub track_documentation: bool,
    /// Set `project.last_updated` whenever the tracker changes
    pub touch_last_updated: bool,
    /// Written into `environment.python_version` by `init`
    pub python_version: String,
    pub sections: Vec<SectionConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tracker_path: PathBuf::from(DEFAULT_TRACKER_PATH),
            docs_dir: PathBuf::from("docs"),
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
            default_status: FileStatus::Active,
            stale: StalePolicy::Keep,
            project_structure: false,
            track_documentation: true,
            touch_last_updated: true,
            python_version: "3.12".to_string(),
            sections: vec![
                SectionConfig {
                    name: KEY_SOURCE_CODE.to_string(),
                    globs: vec!["src/**/*.py".to_string()],
                    infer_covers: false,
                },
                SectionConfig {
                    name: KEY_TESTS.to_string(),
                    globs: vec!["tests/**/*.py".to_string()],
                    infer_covers: true,
                },
            ],
        }
    }
}

impl Config {
    /// Load `tracksync.toml` from the project root, or defaults if absent
    pub fn load(project_root: &Path) -> Result<Self> {
        Self::load_from(&Self::default_path(project_root))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.check()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE_NAME)
    }

    fn check(&self) -> Result<()> {
        if self.sections.is_empty() {
            return Err(Error::Config("at least one [[sections]] entry is required".to_string()));
        }
        for section in &self.sections {
            if section.name.trim().is_empty() {
                return Err(Error::Config("section name must not be empty".to_string()));
            }
            if section.globs.is_empty() {
                return Err(Error::Config(format!(
                    "section '{}' has no globs",
                    section.name
                )));
            }
        }
        let mut names: Vec<&str> = self.sections.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        if let Some(pair) = names.windows(2).find(|w| w[0] == w[1]) {
            return Err(Error::Config(format!("section '{}' is listed twice", pair[0])));
        }
        Ok(())
    }

    pub fn merge_policy(&self) -> MergePolicy {
        MergePolicy {
            sections: self
                .sections
                .iter()
                .map(|s| SectionPolicy {
                    name: s.name.clone(),
                    infer_covers: s.infer_covers,
                })
                .collect(),
            default_status: self.default_status.clone(),
            stale: self.stale,
        }
    }

    pub fn scan_spec(&self) -> ScanSpec {
        ScanSpec {
            sections: self
                .sections
                .iter()
                .map(|s| SectionGlobs {
                    section: s.name.clone(),
                    patterns: s.globs.iter().map(|g| GlobPattern::new(g)).collect(),
                })
                .collect(),
            ignore: IgnoreSet::new(&self.ignore),
        }
    }
}
