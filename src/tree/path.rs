//! Anchoring scan roots inside the persisted tree

use crate::error::StorageError;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Ordered path segments from the filesystem root down to `root`
///
/// A relative root is first placed under `cwd`. The root's parent is then
/// resolved on the filesystem (symlinks and `..` included) and the root's own
/// name is kept as given, so the chain matches the directory the walk will
/// actually enter. When the parent does not exist the path is normalized
/// lexically instead: `.` is dropped and `..` removes the segment before it.
pub fn anchor_segments(root: &Path, cwd: &Path) -> Result<Vec<String>, StorageError> {
    let full = if root.is_relative() {
        if !cwd.is_absolute() {
            return Err(StorageError::InvalidPath(format!(
                "Working directory is not absolute: {}",
                cwd.display()
            )));
        }
        cwd.join(root)
    } else {
        root.to_path_buf()
    };

    let resolved = resolve_location(&full).unwrap_or(full);

    let mut segments = Vec::new();
    push_components(&mut segments, &resolved);
    Ok(segments)
}

/// Name under which a directory entry is stored
pub fn segment_name(name: &OsStr) -> String {
    name.to_string_lossy().into_owned()
}

/// Real location of an absolute path, or None if it cannot be resolved.
fn resolve_location(path: &Path) -> Option<PathBuf> {
    match path.components().next_back()? {
        Component::Normal(name) => {
            let parent = dunce::canonicalize(path.parent()?).ok()?;
            Some(parent.join(name))
        }
        Component::ParentDir => dunce::canonicalize(path).ok(),
        _ => None,
    }
}

fn push_components(segments: &mut Vec<String>, path: &Path) {
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => segments.push(segment_name(prefix.as_os_str())),
            Component::RootDir | Component::CurDir => {}
            Component::ParentDir => {
                segments.pop();
            }
            Component::Normal(name) => segments.push(segment_name(name)),
        }
    }
}
