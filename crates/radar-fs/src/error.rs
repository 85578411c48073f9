//! Error types for radar-fs

use std::path::PathBuf;

/// Result type for radar-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in radar-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid repository name: {name:?}")]
    InvalidRepoName { name: String },

    #[error("Repository '{name}' not found at {path}")]
    RepoNotFound { name: String, path: PathBuf },

    #[error("file not found")]
    FileNotFound { path: PathBuf },

    #[error("Path '{path}' escapes repository root {root}")]
    PathEscape { path: String, root: PathBuf },

    #[error("Path {path} is a directory, not a file")]
    NotAFile { path: PathBuf },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable tag used in tool error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Io { .. } | Self::LockFailed { .. } => "io",
            Self::InvalidRepoName { .. } => "invalid_repo_name",
            Self::RepoNotFound { .. } => "repo_not_found",
            Self::FileNotFound { .. } => "not_found",
            Self::PathEscape { .. } => "path_escape",
            Self::NotAFile { .. } => "invalid_arguments",
        }
    }
}
