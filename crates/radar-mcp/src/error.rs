//! Error types for the MCP server

use std::path::PathBuf;

use serde_json::{Value, json};
use thiserror::Error;

/// Result type alias for MCP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during MCP server operations
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the filesystem layer
    #[error(transparent)]
    Fs(#[from] radar_fs::Error),

    /// Error from the git layer
    #[error(transparent)]
    Git(#[from] radar_git::Error),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid tool arguments
    #[error("invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// Unknown tool requested
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be read or parsed
    #[error("invalid config at {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl Error {
    /// Stable tag used in tool error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fs(e) => e.kind(),
            Self::Git(e) => e.kind(),
            Self::Json(_) | Self::InvalidArguments { .. } => "invalid_arguments",
            Self::UnknownTool(_) => "unknown_tool",
            Self::Io(_) => "io",
            Self::Config { .. } => "config",
        }
    }

    /// Body of an error tool result.
    pub fn payload(&self) -> Value {
        json!({
            "kind": self.kind(),
            "error": self.to_string(),
        })
    }
}
