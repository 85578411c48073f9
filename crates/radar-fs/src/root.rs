//! The clone root: one directory holding every cloned repository.

use std::fs;
use std::path::{Path, PathBuf};

use crate::path::{resolve_within, validate_repo_name};
use crate::{Error, Result};

/// Derive a repository name from a clone URL.
///
/// Takes the final `/`-delimited segment and strips one trailing `.git`.
///
/// ```
/// use radar_fs::repo_name_from_url;
///
/// assert_eq!(repo_name_from_url("https://github.com/rust-lang/rust.git").unwrap(), "rust");
/// ```
pub fn repo_name_from_url(url: &str) -> Result<String> {
    let last = url.rsplit('/').next().unwrap_or(url);
    let name = last.strip_suffix(".git").unwrap_or(last);
    validate_repo_name(name)?;
    Ok(name.to_string())
}

/// Directory under which every repository is checked out, one subdirectory
/// per repository name.
///
/// Passed explicitly to each operation instead of living in a global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneRoot {
    path: PathBuf,
}

impl CloneRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the clone root directory if it is missing.
    pub fn ensure_exists(&self) -> Result<()> {
        fs::create_dir_all(&self.path).map_err(|e| Error::io(&self.path, e))
    }

    /// Local checkout path for `name`, whether or not it exists yet.
    pub fn repo_path(&self, name: &str) -> Result<PathBuf> {
        validate_repo_name(name)?;
        Ok(self.path.join(name))
    }

    /// Local checkout path for `name`, which must already be a directory.
    pub fn existing_repo(&self, name: &str) -> Result<PathBuf> {
        let path = self.repo_path(name)?;
        if !path.is_dir() {
            return Err(Error::RepoNotFound {
                name: name.to_string(),
                path,
            });
        }
        Ok(path)
    }

    /// Resolve a repository-relative path, keeping it inside the repository.
    pub fn resolve(&self, name: &str, relative: &str) -> Result<PathBuf> {
        let repo = self.existing_repo(name)?;
        resolve_within(&repo, relative)
    }
}
