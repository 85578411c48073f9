//! RepoRadar MCP Server
//!
//! A Model Context Protocol server exposing git tools over a directory of
//! cloned repositories.
//!
//! # Usage
//!
//! ```bash
//! reporadar [--config <file>] [--clone-root <path>] [--max-chars <n>]
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `radar_mcp=info,radar_git=info,radar_fs=warn`)
//! - `REPORADAR_CLONE_ROOT`: Same as `--clone-root`
//! - `REPORADAR_MAX_CHARS`: Same as `--max-chars`
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdout
//! - Logs go to stderr (to avoid interfering with the protocol)

use std::path::PathBuf;

use clap::Parser;
use radar_mcp::{RadarMcpServer, ServerConfig};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// MCP server for git operations on cloned repositories
#[derive(Parser)]
#[command(name = "reporadar")]
#[command(about = "MCP server for git operations on cloned repositories")]
#[command(version)]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding cloned repositories
    #[arg(long, env = "REPORADAR_CLONE_ROOT")]
    clone_root: Option<PathBuf>,

    /// Default character limit for read_file
    #[arg(long, env = "REPORADAR_MAX_CHARS")]
    max_chars: Option<usize>,
}

impl Args {
    fn into_config(self) -> radar_mcp::Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)?,
            None => ServerConfig::default(),
        };
        if let Some(clone_root) = self.clone_root {
            config.clone_root = clone_root;
        }
        if let Some(max_chars) = self.max_chars {
            config.read_max_chars = max_chars;
        }
        Ok(config)
    }
}

/// `RUST_LOG` plus server lifecycle, git mutations and rejected paths.
fn log_filter() -> Result<EnvFilter, ParseError> {
    Ok(EnvFilter::from_default_env()
        .add_directive("radar_mcp=info".parse()?)
        .add_directive("radar_git=info".parse()?)
        .add_directive("radar_fs=warn".parse()?))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr (stdout is reserved for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(log_filter()?)
        .with_writer(std::io::stderr)
        .init();

    let config = Args::parse().into_config()?;

    tracing::info!(
        clone_root = ?config.clone_root,
        read_max_chars = config.read_max_chars,
        "Starting reporadar server"
    );

    let mut server = RadarMcpServer::new(config);
    server.run().await?;

    Ok(())
}
