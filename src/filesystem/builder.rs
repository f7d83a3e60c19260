use std::fs;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::{debug, trace};

use crate::ext::{BestEffortPathExt, child_path};
use crate::filesystem::Node;

/// Snapshots the filesystem entry at `path` and everything below it.
///
/// Symbolic links are recorded as leaves and never followed. Directory
/// entries are sorted by name so repeated runs render identically.
pub fn build(path: impl AsRef<Path>) -> Result<Node, BuildError> {
    let path = path.as_ref();
    let name = path.best_effort_display_name();
    build_entry(path, path.to_string_lossy().into_owned(), name)
}

/// `fs_path` is used for every filesystem call; `path` and `name` are the
/// lossily decoded strings stored in the node.
fn build_entry(fs_path: &Path, path: String, name: String) -> Result<Node, BuildError> {
    let metadata = fs::symlink_metadata(fs_path).context(IoSnafu { path: &path })?;
    let file_type = metadata.file_type();
    trace!("Classified '{}' as {:?}", path, file_type);

    if file_type.is_symlink() {
        Ok(Node::symbolic_link(path, name))
    } else if file_type.is_file() {
        Ok(Node::file(path, name))
    } else if file_type.is_dir() {
        debug!("Entering directory '{}'", path);
        let children = list_directory(fs_path, &path)?
            .into_iter()
            .map(|(child, child_fs_path)| {
                build_entry(&child_fs_path, child_path(&path, &child), child)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Node::directory(path, name, children))
    } else {
        InvalidFileTypeSnafu { path }.fail()
    }
}

/// Entries of a directory as (display name, real path), sorted by name.
fn list_directory(fs_path: &Path, path: &str) -> Result<Vec<(String, PathBuf)>, BuildError> {
    let mut entries = fs::read_dir(fs_path)
        .context(IoSnafu { path })?
        .map(|entry| {
            entry.map(|entry| {
                (
                    entry.file_name().to_string_lossy().into_owned(),
                    entry.path(),
                )
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .context(IoSnafu { path })?;
    entries.sort_by(|(left, _), (right, _)| left.cmp(right));
    Ok(entries)
}

#[derive(Debug, Snafu)]
pub enum BuildError {
    #[snafu(display("Unsupported file type at '{}'", path))]
    InvalidFileTypeError { path: String },
    #[snafu(display("Failed to read '{}'", path))]
    IoError {
        path: String,
        source: std::io::Error,
    },
}
