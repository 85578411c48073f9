//! Pushing a local branch to a remote

use git2::{BranchType, ErrorCode, PushOptions, RemoteCallbacks};
use radar_fs::CloneRoot;

use crate::helpers::open_repo;
use crate::{Error, Result};

pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_BRANCH: &str = "main";

/// Push `refs/heads/<branch>` to the same-named branch on `remote`.
///
/// No force, no upstream inference. A non-fast-forward update, whether
/// libgit2 refuses it up front or the server reports it per reference, comes
/// back as [`Error::PushRejected`].
pub fn push(root: &CloneRoot, name: &str, remote: &str, branch: &str) -> Result<()> {
    let (_, repo) = open_repo(root, name)?;

    let mut git_remote = repo
        .find_remote(remote)
        .map_err(|_| Error::RemoteNotFound {
            name: remote.to_string(),
        })?;

    repo.find_branch(branch, BranchType::Local)
        .map_err(|_| Error::BranchNotFound {
            name: branch.to_string(),
        })?;

    let refspec = format!("refs/heads/{}:refs/heads/{}", branch, branch);
    let mut rejection: Option<(String, String)> = None;

    {
        let mut callbacks = RemoteCallbacks::new();
        callbacks.push_update_reference(|reference, status| {
            if let Some(message) = status {
                rejection = Some((reference.to_string(), message.to_string()));
            }
            Ok(())
        });

        let mut options = PushOptions::new();
        options.remote_callbacks(callbacks);

        tracing::info!(repo = %name, remote = %remote, branch = %branch, "Pushing branch");
        git_remote
            .push(&[&refspec], Some(&mut options))
            .map_err(|e| match e.code() {
                ErrorCode::NotFastForward => Error::PushRejected {
                    reference: format!("refs/heads/{}", branch),
                    message: e.message().to_string(),
                },
                _ => Error::Git(e),
            })?;
    }

    if let Some((reference, message)) = rejection {
        return Err(Error::PushRejected { reference, message });
    }

    Ok(())
}
