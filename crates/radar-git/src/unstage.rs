//! Removing changes from the index without touching the working tree

use git2::ResetType;
use radar_fs::CloneRoot;

use crate::helpers::{head_commit, index_paths, open_repo};
use crate::Result;

/// Reset the index entries for `paths` back to HEAD.
///
/// On an unborn branch the entries are dropped from the index instead.
/// Returns the number of paths reset.
pub fn unstage_paths(root: &CloneRoot, name: &str, paths: &[String]) -> Result<usize> {
    let (workdir, repo) = open_repo(root, name)?;
    let clean = index_paths(&workdir, paths)?;
    // An empty pathspec would match the whole index
    if clean.is_empty() {
        return Ok(0);
    }

    let head = head_commit(&repo)?;
    let target = head.as_ref().map(|commit| commit.as_object());
    repo.reset_default(target, clean.iter().map(|p| p.as_path()))?;

    tracing::info!(repo = %name, count = clean.len(), "Unstaged paths");
    Ok(clean.len())
}

/// Reset the whole index to HEAD, leaving the working tree alone.
pub fn unstage_all(root: &CloneRoot, name: &str) -> Result<()> {
    let (_, repo) = open_repo(root, name)?;

    match head_commit(&repo)? {
        Some(commit) => repo.reset(commit.as_object(), ResetType::Mixed, None)?,
        None => {
            let mut index = repo.index()?;
            index.clear()?;
            index.write()?;
        }
    }

    tracing::info!(repo = %name, "Unstaged everything");
    Ok(())
}
