use crate::types::OutputFormat;
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use tracksync_core::{discover_project_root, ensure_directory};
use tracksync_runtime::{Config, SyncService};

pub struct ExecutionContext {
    project_root: PathBuf,
    config_path: PathBuf,
    tracker_override: Option<PathBuf>,
    config: OnceCell<Config>,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(
        project_root: Option<String>,
        config_path: Option<PathBuf>,
        tracker_override: Option<PathBuf>,
        format: OutputFormat,
    ) -> Result<Self> {
        let project_root = discover_project_root(project_root.as_deref())
            .context("failed to determine the project root")?;
        ensure_directory(&project_root)?;
        tracing::debug!(root = %project_root.display(), "project root");

        let config_path = config_path.unwrap_or_else(|| Config::default_path(&project_root));

        Ok(Self {
            project_root,
            config_path,
            tracker_override,
            config: OnceCell::new(),
            format,
        })
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let mut config = Config::load_from(&self.config_path).with_context(|| {
                format!("failed to load config from {}", self.config_path.display())
            })?;
            if let Some(tracker) = &self.tracker_override {
                config.tracker_path = tracker.clone();
            }
            Ok(config)
        })
    }

    pub fn service(&self) -> Result<SyncService> {
        Ok(SyncService::new(&self.project_root, self.config()?.clone()))
    }

    /// Plain output goes to a terminal and may be colored
    pub fn color(&self) -> bool {
        self.format == OutputFormat::Plain && std::io::stdout().is_terminal()
    }
}
