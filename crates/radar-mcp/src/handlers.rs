//! MCP Tool Handlers
//!
//! Each handler parses its arguments, delegates to radar-fs or radar-git, and
//! returns a JSON payload. Failures of any kind come back as [`Error`] and are
//! turned into an error tool result by the server, so every tool reports
//! problems the same way.
//!
//! Note: Handler functions use `async fn` for consistency with the MCP server's
//! tokio runtime, even though the current implementations perform synchronous I/O.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use radar_fs::{read_truncated, render_tree, write_text};
use radar_git::{DEFAULT_BRANCH, DEFAULT_REMOTE};

use crate::config::ServerConfig;
use crate::{Error, Result};

/// Handle a tool call by dispatching to the appropriate handler
pub async fn handle_tool_call(
    config: &ServerConfig,
    tool_name: &str,
    arguments: Value,
) -> Result<Value> {
    match tool_name {
        // Repositories
        "clone_repo" => handle_clone_repo(config, arguments).await,
        "generate_tree" => handle_generate_tree(config, arguments).await,

        // Files
        "read_file" => handle_read_file(config, arguments).await,
        "write_file" => handle_write_file(config, arguments).await,

        // Index & History
        "stage_and_commit" => handle_stage_and_commit(config, arguments).await,
        "unstage_paths" => handle_unstage_paths(config, arguments).await,
        "unstage_all" => handle_unstage_all(config, arguments).await,
        "push" => handle_push(config, arguments).await,

        _ => Err(Error::UnknownTool(tool_name.to_string())),
    }
}

/// Deserialize tool arguments, treating a missing argument object as `{}`.
fn parse_args<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    let arguments = if arguments.is_null() {
        json!({})
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| Error::InvalidArguments {
        message: e.to_string(),
    })
}

// ============================================================================
// Repository Handlers
// ============================================================================

#[derive(Debug, Deserialize)]
struct CloneArgs {
    url: String,
}

/// Handle clone_repo - Clone a remote unless already present
async fn handle_clone_repo(config: &ServerConfig, arguments: Value) -> Result<Value> {
    let args: CloneArgs = parse_args(arguments)?;
    let outcome = radar_git::clone_repo(&config.clone_root(), &args.url)?;

    Ok(json!({
        "path": outcome.path.to_string_lossy(),
        "name": outcome.name,
        "cloned": outcome.cloned,
    }))
}

#[derive(Debug, Deserialize)]
struct TreeArgs {
    #[serde(default)]
    repo: Option<String>,
}

/// Handle generate_tree - Outline of the clone root or a single repository
async fn handle_generate_tree(config: &ServerConfig, arguments: Value) -> Result<Value> {
    let args: TreeArgs = parse_args(arguments)?;
    let root = config.clone_root();

    let tree = match args.repo {
        Some(name) => render_tree(&root.existing_repo(&name)?)?,
        // Nothing cloned yet
        None if !root.path().exists() => String::new(),
        None => render_tree(root.path())?,
    };

    Ok(json!({ "tree": tree }))
}

// ============================================================================
// File Handlers
// ============================================================================

#[derive(Debug, Deserialize)]
struct ReadFileArgs {
    repo: String,
    path: String,
    #[serde(default)]
    max_chars: Option<usize>,
}

/// Handle read_file - Read a file truncated to a character limit
async fn handle_read_file(config: &ServerConfig, arguments: Value) -> Result<Value> {
    let args: ReadFileArgs = parse_args(arguments)?;
    let max_chars = args.max_chars.unwrap_or(config.read_max_chars);

    let path = config.clone_root().resolve(&args.repo, &args.path)?;
    let outcome = read_truncated(&path, max_chars)?;

    Ok(json!({
        "chars": outcome.chars(),
        "content": outcome.content,
        "truncated": outcome.truncated,
    }))
}

#[derive(Debug, Deserialize)]
struct WriteFileArgs {
    repo: String,
    path: String,
    content: String,
}

/// Handle write_file - Replace a file's content in full
async fn handle_write_file(config: &ServerConfig, arguments: Value) -> Result<Value> {
    let args: WriteFileArgs = parse_args(arguments)?;

    let path = config.clone_root().resolve(&args.repo, &args.path)?;
    write_text(&path, &args.content)?;

    tracing::info!(repo = %args.repo, path = %args.path, bytes = args.content.len(), "Wrote file");

    Ok(json!({
        "message": format!("Wrote {} bytes to {}", args.content.len(), args.path),
        "bytes": args.content.len(),
    }))
}

// ============================================================================
// Index & History Handlers
// ============================================================================

#[derive(Debug, Deserialize)]
struct StageCommitArgs {
    repo: String,
    paths: Vec<String>,
    message: String,
}

/// Handle stage_and_commit - Stage explicit paths and commit
async fn handle_stage_and_commit(config: &ServerConfig, arguments: Value) -> Result<Value> {
    let args: StageCommitArgs = parse_args(arguments)?;

    let outcome = radar_git::stage_and_commit(
        &config.clone_root(),
        &args.repo,
        &args.paths,
        &args.message,
        &config.fallback_author(),
    )?;

    Ok(json!({
        "message": format!("Committed {} file(s) with message: {}", outcome.staged, args.message),
        "staged": outcome.staged,
        "commit": outcome.commit.to_string(),
    }))
}

#[derive(Debug, Deserialize)]
struct UnstagePathsArgs {
    repo: String,
    paths: Vec<String>,
}

/// Handle unstage_paths - Reset given index entries to HEAD
async fn handle_unstage_paths(config: &ServerConfig, arguments: Value) -> Result<Value> {
    let args: UnstagePathsArgs = parse_args(arguments)?;
    let count = radar_git::unstage_paths(&config.clone_root(), &args.repo, &args.paths)?;

    Ok(json!({
        "message": format!("Unstaged {} file(s)", count),
        "unstaged": count,
    }))
}

#[derive(Debug, Deserialize)]
struct RepoArgs {
    repo: String,
}

/// Handle unstage_all - Reset the whole index to HEAD
async fn handle_unstage_all(config: &ServerConfig, arguments: Value) -> Result<Value> {
    let args: RepoArgs = parse_args(arguments)?;
    radar_git::unstage_all(&config.clone_root(), &args.repo)?;

    Ok(json!({ "message": "Unstaged all changes" }))
}

#[derive(Debug, Deserialize)]
struct PushArgs {
    repo: String,
    #[serde(default)]
    remote: Option<String>,
    #[serde(default)]
    branch: Option<String>,
}

/// Handle push - Push a branch to a remote
async fn handle_push(config: &ServerConfig, arguments: Value) -> Result<Value> {
    let args: PushArgs = parse_args(arguments)?;
    let remote = args.remote.as_deref().unwrap_or(DEFAULT_REMOTE);
    let branch = args.branch.as_deref().unwrap_or(DEFAULT_BRANCH);

    radar_git::push(&config.clone_root(), &args.repo, remote, branch)?;

    Ok(json!({
        "message": format!("Pushed {} to {}", branch, remote),
        "remote": remote,
        "branch": branch,
    }))
}
