//! Error types for radar-git

/// Result type for radar-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in radar-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error(transparent)]
    Fs(#[from] radar_fs::Error),

    #[error("Remote '{name}' not found")]
    RemoteNotFound { name: String },

    #[error("Branch '{name}' not found")]
    BranchNotFound { name: String },

    #[error("Push of {reference} rejected: {message}")]
    PushRejected { reference: String, message: String },
}

impl Error {
    /// Stable tag used in tool error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Git(_) => "git",
            Self::Fs(e) => e.kind(),
            Self::RemoteNotFound { .. } => "remote_not_found",
            Self::BranchNotFound { .. } => "branch_not_found",
            Self::PushRejected { .. } => "push_rejected",
        }
    }
}
