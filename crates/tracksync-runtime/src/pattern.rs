use wildmatch::WildMatch;

/// Glob matched against `/`-separated paths relative to the project root.
///
/// `*` and `?` are wildcards (`*` may span directories), and every `**/`
/// matches zero or more directories. Each `**/` is expanded into the two
/// alternatives up front, so matching is a handful of plain wildcard checks.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    raw: String,
    alternatives: Vec<WildMatch>,
}

impl GlobPattern {
    pub fn new(pattern: &str) -> Self {
        let alternatives = expand_globstar(pattern)
            .iter()
            .map(|p| WildMatch::new(p))
            .collect();
        Self {
            raw: pattern.to_string(),
            alternatives,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, path: &str) -> bool {
        self.alternatives.iter().any(|m| m.matches(path))
    }
}

fn expand_globstar(pattern: &str) -> Vec<String> {
    match pattern.split_once("**/") {
        None => vec![pattern.replace("**", "*")],
        Some((head, tail)) => expand_globstar(tail)
            .into_iter()
            .flat_map(|rest| [format!("{}{}", head, rest), format!("{}*/{}", head, rest)])
            .collect(),
    }
}

/// One entry of the ignore list.
///
/// A trailing `/` restricts the rule to directories. Rules without any other
/// `/` match a single path component at any depth (`__pycache__`, `*.pyc`);
/// rules with one match the whole relative path.
#[derive(Debug, Clone)]
pub struct IgnoreRule {
    pattern: GlobPattern,
    dir_only: bool,
    anchored: bool,
}

impl IgnoreRule {
    pub fn new(rule: &str) -> Self {
        let dir_only = rule.ends_with('/');
        let body = rule.trim_end_matches('/');
        let anchored = body.contains('/');
        Self {
            pattern: GlobPattern::new(body.trim_start_matches('/')),
            dir_only,
            anchored,
        }
    }

    pub fn is_match(&self, rel_path: &str, is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            return false;
        }
        if self.anchored {
            self.pattern.matches(rel_path)
        } else {
            let name = rel_path.rsplit('/').next().unwrap_or(rel_path);
            self.pattern.matches(name)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    rules: Vec<IgnoreRule>,
}

impl IgnoreSet {
    pub fn new<S: AsRef<str>>(rules: &[S]) -> Self {
        Self {
            rules: rules.iter().map(|r| IgnoreRule::new(r.as_ref())).collect(),
        }
    }

    pub fn is_ignored(&self, rel_path: &str, is_dir: bool) -> bool {
        self.rules.iter().any(|r| r.is_match(rel_path, is_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_globstar_matches_zero_or_more_dirs() {
        let glob = GlobPattern::new("src/**/*.py");
        assert!(glob.matches("src/main.py"));
        assert!(glob.matches("src/agent/data_store.py"));
        assert!(glob.matches("src/a/b/c.py"));
        assert!(!glob.matches("tests/test_main.py"));
        assert!(!glob.matches("src/main.pyc"));
    }

    #[test]
    fn test_multiple_globstars() {
        let glob = GlobPattern::new("src/**/agent/**/*.py");
        assert!(glob.matches("src/agent/x.py"));
        assert!(glob.matches("src/pkg/agent/sub/x.py"));
        assert!(!glob.matches("src/pkg/x.py"));
    }

    #[test]
    fn test_plain_pattern() {
        let glob = GlobPattern::new("pyproject.toml");
        assert!(glob.matches("pyproject.toml"));
        assert!(!glob.matches("sub/pyproject.toml"));
    }

    #[test]
    fn test_ignore_component_rules() {
        let ignore = IgnoreSet::new(&["__pycache__", "*.pyc", "dist/", "*.egg-info/"]);
        assert!(ignore.is_ignored("src/__pycache__", true));
        assert!(ignore.is_ignored("src/pkg/mod.cpython-312.pyc", false));
        assert!(ignore.is_ignored("dist", true));
        assert!(!ignore.is_ignored("dist", false));
        assert!(ignore.is_ignored("src/demo.egg-info", true));
        assert!(!ignore.is_ignored("src/main.py", false));
    }

    #[test]
    fn test_anchored_ignore_rule() {
        let ignore = IgnoreSet::new(&["docs/build/"]);
        assert!(ignore.is_ignored("docs/build", true));
        assert!(!ignore.is_ignored("build", true));
    }
}
