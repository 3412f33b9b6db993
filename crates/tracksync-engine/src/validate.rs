use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_yaml::Value;
use std::fmt;
use tracksync_types::{KEY_DOCUMENTATION, KEY_FILES, KEY_PROJECT, KEY_SOURCE_CODE, KEY_TESTS, TrackerDocument};

static VERSION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("valid regex"));
static URI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://\S+$").expect("valid regex"));

/// A single schema violation, located by a dotted key path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub location: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Check the tracker against its schema and return every violation found
pub fn validate(doc: &TrackerDocument) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    validate_project(doc, &mut issues);
    validate_documentation(doc, &mut issues);
    for section in [KEY_SOURCE_CODE, KEY_TESTS] {
        validate_files(doc, section, &mut issues);
    }

    issues
}

fn validate_project(doc: &TrackerDocument, issues: &mut Vec<ValidationIssue>) {
    let Some(project) = doc.get(KEY_PROJECT) else {
        issues.push(ValidationIssue::new(KEY_PROJECT, "required section is missing"));
        return;
    };
    let Some(project) = project.as_mapping() else {
        issues.push(ValidationIssue::new(KEY_PROJECT, "must be a mapping"));
        return;
    };

    match project.get("name") {
        Some(Value::String(_)) => {}
        Some(_) => issues.push(ValidationIssue::new("project.name", "must be a string")),
        None => issues.push(ValidationIssue::new("project.name", "is required")),
    }

    match project.get("version") {
        Some(Value::String(version)) if VERSION_RE.is_match(version) => {}
        Some(Value::String(version)) => issues.push(ValidationIssue::new(
            "project.version",
            format!("'{}' does not match MAJOR.MINOR.PATCH", version),
        )),
        Some(_) => issues.push(ValidationIssue::new("project.version", "must be a string")),
        None => issues.push(ValidationIssue::new("project.version", "is required")),
    }

    if let Some(description) = project.get("description")
        && !description.is_string()
    {
        issues.push(ValidationIssue::new("project.description", "must be a string"));
    }

    if let Some(repository) = project.get("repository") {
        match repository.as_str() {
            Some(uri) if URI_RE.is_match(uri) => {}
            _ => issues.push(ValidationIssue::new("project.repository", "must be a URI")),
        }
    }
}

fn validate_documentation(doc: &TrackerDocument, issues: &mut Vec<ValidationIssue>) {
    let Some(documentation) = doc.get(KEY_DOCUMENTATION) else {
        return;
    };
    let Some(documentation) = documentation.as_mapping() else {
        issues.push(ValidationIssue::new(KEY_DOCUMENTATION, "must be a mapping"));
        return;
    };

    if let Some(generated) = documentation.get("generated")
        && !generated.is_bool()
    {
        issues.push(ValidationIssue::new("documentation.generated", "must be a boolean"));
    }
    for key in ["last_updated", "tool"] {
        if let Some(value) = documentation.get(key)
            && !value.is_string()
        {
            issues.push(ValidationIssue::new(
                format!("documentation.{}", key),
                "must be a string",
            ));
        }
    }
}

/// Shape checks for one file section: a mapping (or null) whose `files`,
/// if present, is a list of mappings with a string `path`
pub fn validate_section(doc: &TrackerDocument, section: &str) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    validate_files(doc, section, &mut issues);
    issues
}

fn validate_files(doc: &TrackerDocument, section: &str, issues: &mut Vec<ValidationIssue>) {
    let Some(value) = doc.get(section) else {
        return;
    };
    if value.is_null() {
        return;
    }
    let Some(map) = value.as_mapping() else {
        issues.push(ValidationIssue::new(section, "must be a mapping"));
        return;
    };
    let Some(files) = map.get(KEY_FILES) else {
        return;
    };
    let Some(files) = files.as_sequence() else {
        issues.push(ValidationIssue::new(format!("{}.files", section), "must be a list"));
        return;
    };

    for (i, entry) in files.iter().enumerate() {
        let location = format!("{}.files[{}]", section, i);
        match entry.as_mapping() {
            None => issues.push(ValidationIssue::new(location, "must be a mapping")),
            Some(entry) => {
                if !entry.get("path").is_some_and(Value::is_string) {
                    issues.push(ValidationIssue::new(format!("{}.path", location), "must be a string"));
                }
            }
        }
    }
}
