//! Staging explicit paths and committing them

use git2::{Commit, Oid, Signature};
use radar_fs::{CloneRoot, Error as FsError};

use crate::helpers::{head_commit, index_paths, open_repo};
use crate::Result;

/// Fallback identity for commits in repositories without `user.name` and
/// `user.email` configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Author {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Default for Author {
    fn default() -> Self {
        Self::new("RepoRadar", "reporadar@localhost")
    }
}

/// Result of [`stage_and_commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    /// Number of paths staged before committing
    pub staged: usize,

    /// Id of the new commit
    pub commit: Oid,
}

/// Stage exactly `paths`, then commit the index onto HEAD.
///
/// A path that exists in the working tree is added. A path missing from the
/// working tree but present in the index is staged as a removal. A path that
/// is neither fails the call with a not-found error.
pub fn stage_and_commit(
    root: &CloneRoot,
    name: &str,
    paths: &[String],
    message: &str,
    fallback: &Author,
) -> Result<CommitOutcome> {
    let (workdir, repo) = open_repo(root, name)?;
    let clean = index_paths(&workdir, paths)?;

    let mut index = repo.index()?;
    for path in &clean {
        if workdir.join(path).symlink_metadata().is_ok() {
            index.add_path(path)?;
        } else if index.get_path(path, 0).is_some() {
            index.remove_path(path)?;
        } else {
            return Err(FsError::FileNotFound {
                path: workdir.join(path),
            }
            .into());
        }
    }
    index.write()?;

    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;

    let signature = match repo.signature() {
        Ok(sig) => sig,
        Err(e) => {
            tracing::debug!(error = %e, "No configured signature, using fallback author");
            Signature::now(&fallback.name, &fallback.email)?
        }
    };

    let parent = head_commit(&repo)?;
    let parents: Vec<&Commit> = parent.iter().collect();

    let oid = repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parents,
    )?;

    tracing::info!(repo = %name, staged = clean.len(), commit = %oid, "Committed staged paths");

    Ok(CommitOutcome {
        staged: clean.len(),
        commit: oid,
    })
}
