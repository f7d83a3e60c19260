use std::path::{Component, Path, PathBuf};

/// Name shown for a path in the tree.
///
/// Uses the last component when there is one. Paths such as `.`, `..` or `/`
/// have no usable last component, so the canonical path is consulted, and
/// failing that the path text itself is shown.
pub fn best_effort_display_name(path: &Path) -> String {
    if let Some(Component::Normal(name)) = path.components().next_back() {
        return name.to_string_lossy().into_owned();
    }

    match path.canonicalize() {
        Ok(canonical_path) => canonical_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| canonical_path.display().to_string()),
        Err(_) => path.display().to_string(),
    }
}

/// Joins a child name onto a parent path string with a single `/`.
pub fn child_path(parent: &str, child: &str) -> String {
    let parent = parent.trim_end_matches('/');
    format!("{parent}/{child}")
}

pub trait BestEffortPathExt {
    fn best_effort_display_name(&self) -> String;
}

impl BestEffortPathExt for Path {
    fn best_effort_display_name(&self) -> String {
        best_effort_display_name(self)
    }
}

impl BestEffortPathExt for PathBuf {
    fn best_effort_display_name(&self) -> String {
        best_effort_display_name(self)
    }
}

impl BestEffortPathExt for &str {
    fn best_effort_display_name(&self) -> String {
        best_effort_display_name(Path::new(self))
    }
}

impl BestEffortPathExt for String {
    fn best_effort_display_name(&self) -> String {
        best_effort_display_name(Path::new(self))
    }
}
