//! Filesystem layer for RepoRadar
//!
//! Resolves repositories under the clone root, keeps every file path inside
//! its repository, and provides the read, write and tree-listing primitives
//! the tool handlers build on.

pub mod error;
pub mod io;
pub mod path;
pub mod root;
pub mod tree;

pub use error::{Error, Result};
pub use io::{
    DEFAULT_MAX_CHARS, ReadOutcome, decode_lossy, read_truncated, write_atomic, write_text,
};
pub use path::{normalize_relative, resolve_within, validate_repo_name};
pub use root::{CloneRoot, repo_name_from_url};
pub use tree::{generate_tree, render_tree};
