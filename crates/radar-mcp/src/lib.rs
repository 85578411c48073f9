//! MCP Server for RepoRadar
//!
//! This crate exposes git operations on locally cloned repositories via the
//! Model Context Protocol (MCP), so agents can clone, inspect, edit, commit
//! and push without shelling out.
//!
//! # Architecture
//!
//! ```text
//! [ MCP Client (agent/IDE) ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ radar-mcp (MCP Server) ]
//!        | (Rust API)
//!        v
//! [ radar-git ] --> [ radar-fs ]
//!        |
//!        +--> [ <clone root>/<repo>/ (working copies) ]
//! ```
//!
//! # Tools
//!
//! - `clone_repo` - Clone a remote into the clone root
//! - `generate_tree` - Outline of the clone root or one repository
//! - `read_file` / `write_file` - File contents inside a repository
//! - `stage_and_commit` - Stage explicit paths and commit
//! - `unstage_paths` / `unstage_all` - Reset index entries to HEAD
//! - `push` - Push a branch to a remote
//!
//! Every tool reports failures the same way: a tool result flagged
//! `isError` whose text is a JSON object `{"kind": ..., "error": ...}`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use handlers::handle_tool_call;
pub use server::RadarMcpServer;
pub use tools::{ToolContent, ToolDefinition, ToolResult, get_tool_definitions};
