//! Git repository fixtures.
//!
//! All repositories start on `main` and carry a local `user.name` /
//! `user.email` so commits work regardless of the host's global config.

use std::fs;
use std::path::Path;

use git2::{Oid, Repository, RepositoryInitOptions};

/// Initialises a working-tree repository on `main` with a test identity.
///
/// # Panics
/// Panics if the repository cannot be created or configured.
pub fn init_repo(path: &Path) -> Repository {
    let mut opts = RepositoryInitOptions::new();
    opts.initial_head("main");
    let repo = Repository::init_opts(path, &opts)
        .unwrap_or_else(|e| panic!("init_repo: failed at {}: {e}", path.display()));

    {
        let mut config = repo
            .config()
            .unwrap_or_else(|e| panic!("init_repo: failed to open config: {e}"));
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@test.com").unwrap();
    }

    repo
}

/// Initialises a bare repository on `main`, suitable as a push target or a
/// clone source.
///
/// # Panics
/// Panics if the repository cannot be created.
pub fn bare_remote(path: &Path) -> Repository {
    let mut opts = RepositoryInitOptions::new();
    opts.bare(true).initial_head("main");
    Repository::init_opts(path, &opts)
        .unwrap_or_else(|e| panic!("bare_remote: failed at {}: {e}", path.display()))
}

/// Writes `relative` with `content`, stages it and commits on HEAD.
///
/// # Panics
/// Panics if any filesystem or git operation fails.
pub fn commit_file(repo: &Repository, relative: &str, content: &str, message: &str) -> Oid {
    let workdir = repo.workdir().expect("commit_file: repository has no workdir");
    let file = workdir.join(relative);
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file, content).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(relative)).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

    let sig = repo.signature().unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap()
}

/// Creates a working repository at `path` with one commit of `README.md`.
pub fn repo_with_commit(path: &Path) -> Repository {
    let repo = init_repo(path);
    commit_file(&repo, "README.md", "# Test", "Initial commit");
    repo
}

/// Paths whose index state differs from HEAD, sorted.
pub fn staged_paths(repo: &Repository) -> Vec<String> {
    let head_tree = repo.head().ok().and_then(|h| h.peel_to_tree().ok());
    let diff = repo
        .diff_tree_to_index(head_tree.as_ref(), None, None)
        .unwrap();

    let mut paths: Vec<String> = diff
        .deltas()
        .filter_map(|delta| {
            delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(|p| p.to_string_lossy().into_owned())
        })
        .collect();
    paths.sort();
    paths
}

/// Message of the commit HEAD points at.
pub fn head_message(repo: &Repository) -> String {
    repo.head()
        .unwrap()
        .peel_to_commit()
        .unwrap()
        .message()
        .unwrap_or_default()
        .to_string()
}
