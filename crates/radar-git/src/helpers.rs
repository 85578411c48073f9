//! Shared git2 helpers used by the operations in this crate

use std::path::{Path, PathBuf};

use git2::{Commit, ErrorCode, Repository};
use radar_fs::{CloneRoot, normalize_relative, resolve_within};

use crate::Result;

/// Open the checkout for `name` under the clone root.
pub fn open_repo(root: &CloneRoot, name: &str) -> Result<(PathBuf, Repository)> {
    let path = root.existing_repo(name)?;
    let repo = Repository::open(&path)?;
    Ok((path, repo))
}

/// The commit HEAD points at, or `None` on an unborn branch.
pub fn head_commit(repo: &Repository) -> Result<Option<Commit<'_>>> {
    match repo.head() {
        Ok(head) => Ok(Some(head.peel_to_commit()?)),
        Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Turn caller-supplied paths into clean index paths relative to `workdir`.
///
/// Every path is checked against the repository root first; a single escaping
/// path fails the whole batch before anything is staged.
pub fn index_paths(workdir: &Path, paths: &[String]) -> Result<Vec<PathBuf>> {
    paths
        .iter()
        .map(|p| -> Result<PathBuf> {
            resolve_within(workdir, p)?;
            Ok(normalize_relative(workdir, p)?)
        })
        .collect()
}
