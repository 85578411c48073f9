//! Repository-relative path handling
//!
//! Tool arguments name files relative to a repository root. Every such path is
//! resolved here before touching the filesystem: dot segments are folded
//! lexically, and the nearest existing ancestor is canonicalized so a symlink
//! cannot lead outside the repository either.

use std::path::{Component, Path, PathBuf};

use crate::{Error, Result};

/// Validate a repository name.
///
/// A name must be exactly one normal path component: no separators, no dot
/// segments, no NUL bytes.
pub fn validate_repo_name(name: &str) -> Result<()> {
    let invalid = || Error::InvalidRepoName {
        name: name.to_string(),
    };

    if name.is_empty() || name == "." || name == ".." {
        return Err(invalid());
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(invalid());
    }

    Ok(())
}

/// Fold a relative path into its clean form.
///
/// Backslashes are treated as separators. `.` segments are dropped and `..`
/// pops the previous segment. Absolute paths and any `..` that would climb
/// above the starting point are rejected.
pub fn normalize_relative(root: &Path, relative: &str) -> Result<PathBuf> {
    let escape = || Error::PathEscape {
        path: relative.to_string(),
        root: root.to_path_buf(),
    };

    let unified = relative.replace('\\', "/");
    let mut clean = PathBuf::new();

    for component in Path::new(&unified).components() {
        match component {
            Component::Normal(segment) => clean.push(segment),
            Component::CurDir => {}
            Component::ParentDir => {
                if !clean.pop() {
                    return Err(escape());
                }
            }
            Component::RootDir | Component::Prefix(_) => return Err(escape()),
        }
    }

    Ok(clean)
}

/// Resolve `relative` under `root`, refusing anything that ends up outside it.
///
/// `root` must exist. The returned path is `root` joined with the cleaned
/// relative path; the target itself does not need to exist.
pub fn resolve_within(root: &Path, relative: &str) -> Result<PathBuf> {
    let clean = normalize_relative(root, relative)?;
    let candidate = root.join(&clean);

    let canonical_root = dunce::canonicalize(root).map_err(|e| Error::io(root, e))?;

    // Walk up to the deepest part of the candidate that exists on disk.
    let mut existing = candidate.as_path();
    while std::fs::symlink_metadata(existing).is_err() {
        match existing.parent() {
            Some(parent) => existing = parent,
            None => break,
        }
    }

    let canonical_existing =
        dunce::canonicalize(existing).map_err(|e| Error::io(existing, e))?;

    if !canonical_existing.starts_with(&canonical_root) {
        tracing::warn!(
            path = %relative,
            resolved = %canonical_existing.display(),
            "Rejected path outside repository"
        );
        return Err(Error::PathEscape {
            path: relative.to_string(),
            root: root.to_path_buf(),
        });
    }

    tracing::debug!(path = %relative, resolved = %candidate.display(), "Resolved path");
    Ok(candidate)
}
