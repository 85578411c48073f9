//! MCP tool definitions
//!
//! Names, descriptions and JSON input schemas advertised by `tools/list`,
//! plus the result envelope every `tools/call` answers with.
//!
//! # Tool Categories
//!
//! ## Repositories
//! - `clone_repo` - Clone a remote into the clone root (skipped if present)
//! - `generate_tree` - Box-drawing outline of the clone root or one repository
//!
//! ## Files
//! - `read_file` - Read up to a character limit
//! - `write_file` - Replace a file's content, creating parent directories
//!
//! ## Index & History
//! - `stage_and_commit` - Stage explicit paths, then commit
//! - `unstage_paths` - Reset given index entries to HEAD
//! - `unstage_all` - Reset the whole index to HEAD
//! - `push` - Push a local branch to a remote

use serde::{Deserialize, Serialize};

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Result from a tool invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

/// Content types for tool results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolResult {
    /// Create a successful text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: content.into(),
            }],
            is_error: None,
        }
    }

    /// Create an error result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: Some(true),
        }
    }
}

fn repo_property() -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": "Repository name (directory under the clone root)"
    })
}

fn paths_property(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "array",
        "items": { "type": "string" },
        "description": description
    })
}

/// Get all available tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        // Repositories
        ToolDefinition {
            name: "clone_repo".to_string(),
            description: "Clone a remote repository into the clone root; no-op if a directory \
                          of the same name already exists"
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "Clone URL; its last path segment minus .git names the repository"
                    }
                },
                "required": ["url"]
            }),
        },
        ToolDefinition {
            name: "generate_tree".to_string(),
            description: "List the directory tree of the clone root, or of one repository"
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "repo": {
                        "type": "string",
                        "description": "Limit the listing to this repository"
                    }
                }
            }),
        },
        // Files
        ToolDefinition {
            name: "read_file".to_string(),
            description: "Read a file inside a repository, truncated to max_chars characters"
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "repo": repo_property(),
                    "path": {
                        "type": "string",
                        "description": "Path relative to the repository root"
                    },
                    "max_chars": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Maximum characters to return (defaults to 5000)"
                    }
                },
                "required": ["repo", "path"]
            }),
        },
        ToolDefinition {
            name: "write_file".to_string(),
            description: "Replace a file's content, creating missing parent directories. \
                          Does not stage or commit."
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "repo": repo_property(),
                    "path": {
                        "type": "string",
                        "description": "Path relative to the repository root"
                    },
                    "content": {
                        "type": "string",
                        "description": "Full new file content"
                    }
                },
                "required": ["repo", "path", "content"]
            }),
        },
        // Index & History
        ToolDefinition {
            name: "stage_and_commit".to_string(),
            description: "Stage exactly the given paths and commit them".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "repo": repo_property(),
                    "paths": paths_property("Paths to stage, relative to the repository root"),
                    "message": {
                        "type": "string",
                        "description": "Commit message"
                    }
                },
                "required": ["repo", "paths", "message"]
            }),
        },
        ToolDefinition {
            name: "unstage_paths".to_string(),
            description: "Unstage the given paths; the working tree is untouched".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "repo": repo_property(),
                    "paths": paths_property("Paths to unstage, relative to the repository root")
                },
                "required": ["repo", "paths"]
            }),
        },
        ToolDefinition {
            name: "unstage_all".to_string(),
            description: "Unstage everything; the working tree is untouched".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "repo": repo_property()
                },
                "required": ["repo"]
            }),
        },
        ToolDefinition {
            name: "push".to_string(),
            description: "Push a local branch to the same-named branch on a remote".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "repo": repo_property(),
                    "remote": {
                        "type": "string",
                        "description": "Remote name (defaults to origin)"
                    },
                    "branch": {
                        "type": "string",
                        "description": "Branch name (defaults to main)"
                    }
                },
                "required": ["repo"]
            }),
        },
    ]
}
