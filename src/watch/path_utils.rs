// src/watch/path_utils.rs

//! Path helpers for the watcher.

use std::path::{Path, PathBuf};

/// Convert an event path into a string relative to the (canonical) watch
/// root, with forward slashes.
///
/// - First we try a direct `strip_prefix(root)`.
/// - If that fails (symlinks, `/private/var` vs `/var` on macOS, ...), we
///   canonicalize the path and try again. Removed files can no longer be
///   canonicalized, so for those the parent directory is canonicalized
///   instead and the file name re-attached.
///
/// Returns `None` if the path cannot be related to `root`.
pub fn relative_str(root: &Path, path: &Path) -> Option<String> {
    if let Ok(rel) = path.strip_prefix(root) {
        return Some(to_forward_slashes(rel));
    }

    let canonical = canonical_or_parent(path)?;
    let rel = canonical.strip_prefix(root).ok()?;
    Some(to_forward_slashes(rel))
}

fn canonical_or_parent(path: &Path) -> Option<PathBuf> {
    if let Ok(canon) = path.canonicalize() {
        return Some(canon);
    }
    let parent = path.parent()?.canonicalize().ok()?;
    Some(parent.join(path.file_name()?))
}

fn to_forward_slashes(rel: &Path) -> String {
    rel.to_string_lossy().replace('\\', "/")
}
