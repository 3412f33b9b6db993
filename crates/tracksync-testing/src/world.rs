//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated project directory
//! - Writing source files with pinned modification times
//! - Executing the CLI against that project

use anyhow::Result;
use assert_cmd::Command;
use filetime::{FileTime, set_file_mtime};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::PINNED_MTIME;

/// Tracker location used when no config overrides it
pub const TRACKER_PATH: &str = ".github/project_tracker.yaml";

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use tracksync_testing::TestWorld;
///
/// let world = TestWorld::new()
///     .with_file("src/main.py", "print('hi')\n")
///     .with_tracker(tracksync_testing::fixtures::MINIMAL_TRACKER);
///
/// let result = world.run(&["sync"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    root: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated project directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join("project");
        std::fs::create_dir_all(&root).expect("Failed to create project dir");

        Self {
            temp_dir,
            root,
            env_vars: HashMap::new(),
        }
    }

    /// Get the project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the temp directory root (parent of the project).
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn tracker_path(&self) -> PathBuf {
        self.root.join(TRACKER_PATH)
    }

    /// Write a file relative to the project root with the pinned mtime.
    pub fn write_file(&self, rel: &str, content: &str) -> Result<()> {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        self.set_mtime(rel, PINNED_MTIME)
    }

    pub fn with_file(self, rel: &str, content: &str) -> Self {
        self.write_file(rel, content).expect("Failed to write file");
        self
    }

    /// Set a file's modification time to `unix_secs`.
    pub fn set_mtime(&self, rel: &str, unix_secs: i64) -> Result<()> {
        set_file_mtime(self.root.join(rel), FileTime::from_unix_time(unix_secs, 0))?;
        Ok(())
    }

    pub fn with_tracker(self, content: &str) -> Self {
        let path = self.tracker_path();
        std::fs::create_dir_all(path.parent().expect("tracker has a parent"))
            .expect("Failed to create tracker dir");
        std::fs::write(path, content).expect("Failed to write tracker");
        self
    }

    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.root.join("tracksync.toml"), toml).expect("Failed to write config");
        self
    }

    pub fn read_tracker(&self) -> Result<String> {
        Ok(std::fs::read_to_string(self.tracker_path())?)
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `cargo_bin_cmd!("tracksync")`).
    /// Ambient `RUST_LOG` and `TRACKSYNC_PROJECT_ROOT` are cleared so the host
    /// environment cannot leak into the test.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--project-root").arg(&self.root);

        cmd.current_dir(&self.root);
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("TRACKSYNC_PROJECT_ROOT");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the tracksync binary with `args`.
    ///
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built by the crate running the test.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("tracksync")
            .map_err(|e| anyhow::anyhow!("Failed to find tracksync binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
