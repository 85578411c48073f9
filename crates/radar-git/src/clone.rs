//! Cloning remotes into the clone root

use std::path::PathBuf;

use git2::build::RepoBuilder;
use radar_fs::{CloneRoot, repo_name_from_url};

use crate::Result;

/// Where a clone request ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneOutcome {
    /// Repository name derived from the URL
    pub name: String,

    /// Local checkout path
    pub path: PathBuf,

    /// False when the directory already existed and nothing was fetched
    pub cloned: bool,
}

/// Clone `url` into the clone root unless a directory of the same name exists.
///
/// Existence of the target directory is the only check: an existing directory
/// is trusted as a checkout of this remote and is neither verified nor
/// updated.
pub fn clone_repo(root: &CloneRoot, url: &str) -> Result<CloneOutcome> {
    let name = repo_name_from_url(url)?;
    let path = root.repo_path(&name)?;

    if path.exists() {
        tracing::info!(
            url = %url,
            path = %path.display(),
            "Repository already present, skipping clone"
        );
        return Ok(CloneOutcome {
            name,
            path,
            cloned: false,
        });
    }

    root.ensure_exists()?;

    tracing::info!(url = %url, path = %path.display(), "Cloning repository");
    RepoBuilder::new().clone(url, &path)?;

    Ok(CloneOutcome {
        name,
        path,
        cloned: true,
    })
}
