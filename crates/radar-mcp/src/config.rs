//! Server configuration
//!
//! Built-in defaults, optionally overlaid by a TOML file, then by command-line
//! flags and environment variables in `main`.
//!
//! ```toml
//! clone_root = "/var/lib/reporadar/repos"
//! read_max_chars = 8000
//!
//! [author]
//! name = "Release Bot"
//! email = "bot@example.com"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use radar_fs::{CloneRoot, DEFAULT_MAX_CHARS};
use radar_git::Author;
use serde::Deserialize;

use crate::{Error, Result};

/// Directory used for clones when nothing else is configured.
pub const DEFAULT_CLONE_ROOT: &str = "cloned_repos";

/// Identity used for commits when a repository has none configured.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    pub name: String,
    pub email: String,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        let author = Author::default();
        Self {
            name: author.name,
            email: author.email,
        }
    }
}

/// Runtime configuration shared by every tool call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Directory holding one checkout per repository
    pub clone_root: PathBuf,

    /// Character limit for `read_file` when the caller gives none
    pub read_max_chars: usize,

    /// Fallback commit identity
    pub author: AuthorConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            clone_root: PathBuf::from(DEFAULT_CLONE_ROOT),
            read_max_chars: DEFAULT_MAX_CHARS,
            author: AuthorConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Configuration rooted at `clone_root`, defaults elsewhere.
    pub fn with_clone_root(clone_root: impl Into<PathBuf>) -> Self {
        Self {
            clone_root: clone_root.into(),
            ..Self::default()
        }
    }

    /// Parse a TOML config file. Keys left out keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            Error::Config { message, .. } => Error::Config {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    /// Parse TOML config text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config {
            path: PathBuf::new(),
            message: e.to_string(),
        })
    }

    pub fn clone_root(&self) -> CloneRoot {
        CloneRoot::new(&self.clone_root)
    }

    pub fn fallback_author(&self) -> Author {
        Author::new(&self.author.name, &self.author.email)
    }
}
