//! Git operations for RepoRadar
//!
//! Each operation opens the repository fresh from the clone root and drops it
//! before returning. No repository state is cached between calls.

pub mod clone;
pub mod commit;
pub mod error;
pub mod helpers;
pub mod push;
pub mod unstage;

pub use clone::{CloneOutcome, clone_repo};
pub use commit::{Author, CommitOutcome, stage_and_commit};
pub use error::{Error, Result};
pub use push::{DEFAULT_BRANCH, DEFAULT_REMOTE, push};
pub use unstage::{unstage_all, unstage_paths};
