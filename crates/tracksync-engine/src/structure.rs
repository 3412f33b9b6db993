use serde_yaml::{Mapping, Value};

/// File extensions recorded in `project_structure`
pub const STRUCTURE_EXTENSIONS: [&str; 5] = ["py", "toml", "yaml", "yml", "md"];

pub fn is_structure_file(path: &str) -> bool {
    path.rsplit_once('.')
        .is_some_and(|(_, ext)| STRUCTURE_EXTENSIONS.contains(&ext))
}

/// Nested directory map of `paths`.
///
/// Each directory component becomes a mapping key; the leaf is keyed by file
/// name and holds the full relative path. Only files passing
/// [`is_structure_file`] are included, in the order given.
pub fn build_structure<'a>(paths: impl IntoIterator<Item = &'a str>) -> Mapping {
    let mut root = Mapping::new();

    for path in paths.into_iter().filter(|p| is_structure_file(p)) {
        let mut parts: Vec<&str> = path.split('/').collect();
        let Some(file_name) = parts.pop() else {
            continue;
        };

        let mut current = &mut root;
        for dir in parts {
            if !matches!(current.get(dir), Some(Value::Mapping(_))) {
                current.insert(dir.into(), Value::Mapping(Mapping::new()));
            }
            current = match current.get_mut(dir) {
                Some(Value::Mapping(map)) => map,
                _ => unreachable!("directory mapping was just inserted"),
            };
        }
        current.insert(file_name.into(), Value::String(path.to_string()));
    }

    root
}
