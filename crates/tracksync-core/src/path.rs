use crate::{Error, Result};
use std::path::{Component, Path, PathBuf};
use std::process::Command;

/// Environment variable that overrides project root discovery
pub const PROJECT_ROOT_ENV: &str = "TRACKSYNC_PROJECT_ROOT";

/// Discover project root based on priority:
/// 1. explicit_project_root (--project-root flag)
/// 2. TRACKSYNC_PROJECT_ROOT environment variable
/// 3. Top level of the enclosing git work tree
/// 4. Current working directory
pub fn discover_project_root(explicit_project_root: Option<&str>) -> Result<PathBuf> {
    if let Some(root) = explicit_project_root {
        return Ok(expand_tilde(root));
    }

    if let Ok(env_root) = std::env::var(PROJECT_ROOT_ENV) {
        return Ok(expand_tilde(&env_root));
    }

    let cwd = std::env::current_dir()?;
    if let Some(toplevel) = git_toplevel(&cwd) {
        tracing::debug!(root = %toplevel.display(), "using git work tree as project root");
        return Ok(toplevel);
    }

    Ok(cwd)
}

/// Top level of the git work tree containing `dir`, if any.
///
/// Returns None when git is not installed or `dir` is not inside a work tree.
pub fn git_toplevel(dir: &Path) -> Option<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(dir)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let toplevel = String::from_utf8_lossy(&output.stdout);
    let toplevel = toplevel.trim();
    if toplevel.is_empty() {
        None
    } else {
        Some(PathBuf::from(toplevel))
    }
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Normalize a path for comparison (resolve to absolute, canonicalize if possible)
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    })
}

/// Resolve `path` against `root` unless it is already absolute
pub fn resolve_in_root(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Path of `path` relative to `root`, joined with `/` on every platform.
///
/// Returns None if `path` is not under `root` or contains `..`.
pub fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?.to_string()),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Fail with a config error if `root` is not an existing directory
pub fn ensure_directory(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "project root is not a directory: {}",
            root.display()
        )))
    }
}
