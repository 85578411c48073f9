//! MCP Server implementation
//!
//! Reads one JSON-RPC message per line from stdin and writes one response per
//! line to stdout. Messages are handled strictly one at a time.

use std::io::{BufRead, Write};

use serde_json::{Value, json};

use crate::config::ServerConfig;
use crate::handlers::handle_tool_call;
use crate::protocol::{
    InitializeResult, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION, ServerCapabilities,
    ServerInfo, ToolCallParams, ToolsCapability, codes,
};
use crate::tools::{ToolDefinition, ToolResult, get_tool_definitions};
use crate::{Error, Result};

/// MCP Server for RepoRadar
///
/// # Example
///
/// ```ignore
/// use radar_mcp::{RadarMcpServer, ServerConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut server = RadarMcpServer::new(ServerConfig::default());
///     server.run().await?;
///     Ok(())
/// }
/// ```
pub struct RadarMcpServer {
    /// Clone root, read limit and fallback author
    config: ServerConfig,

    /// Whether the server has been initialized
    initialized: bool,

    /// Available MCP tools
    tools: Vec<ToolDefinition>,
}

impl RadarMcpServer {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            initialized: false,
            tools: Vec::new(),
        }
    }

    /// Initialize the server
    ///
    /// Creates the clone root if needed and loads the tool definitions.
    pub async fn initialize(&mut self) -> Result<()> {
        tracing::info!(clone_root = ?self.config.clone_root, "Initializing MCP server");

        self.config.clone_root().ensure_exists()?;
        self.tools = get_tool_definitions();

        self.initialized = true;
        Ok(())
    }

    /// Run the MCP server
    ///
    /// This starts the server and begins processing MCP protocol
    /// messages over stdin/stdout.
    pub async fn run(&mut self) -> Result<()> {
        self.initialize().await?;

        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();

        tracing::info!("MCP server ready, listening on stdio");

        for line in stdin.lock().lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            tracing::debug!(request = %line, "Received message");

            match self.handle_message(&line).await {
                Ok(response) if !response.is_empty() => {
                    writeln!(stdout, "{}", response)?;
                    stdout.flush()?;
                }
                Ok(_) => {} // No response needed (notifications)
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to handle message");
                    let error_response = JsonRpcResponse::error(
                        None,
                        codes::INTERNAL_ERROR,
                        format!("Internal error: {}", e),
                    );
                    let json_str = serde_json::to_string(&error_response)?;
                    writeln!(stdout, "{}", json_str)?;
                    stdout.flush()?;
                }
            }
        }

        tracing::info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle a single MCP message
    ///
    /// Returns the JSON-RPC response as a string, or an empty string for
    /// notifications.
    ///
    /// Lines that are not JSON get a parse error; JSON that is not a
    /// JSON-RPC 2.0 request gets an invalid-request error.
    pub async fn handle_message(&self, message: &str) -> Result<String> {
        let value: Value = match serde_json::from_str(message) {
            Ok(value) => value,
            Err(e) => {
                let response =
                    JsonRpcResponse::error(None, codes::PARSE_ERROR, format!("Parse error: {}", e));
                return serde_json::to_string(&response).map_err(Error::from);
            }
        };

        let id = value.get("id").cloned().filter(|id| !id.is_null());
        let request: JsonRpcRequest = match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) if request.jsonrpc == "2.0" => request,
            Ok(request) => {
                let message = format!("Unsupported jsonrpc version: {}", request.jsonrpc);
                return self.invalid_request(id, message);
            }
            Err(e) => return self.invalid_request(id, format!("Invalid request: {}", e)),
        };

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id).await?,
            "initialized" | "notifications/initialized" => return Ok(String::new()),
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            "tools/list" => self.handle_tools_list(request.id).await?,
            "tools/call" => self.handle_tools_call(request.id, request.params).await?,
            _ => JsonRpcResponse::error(
                request.id,
                codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        };

        serde_json::to_string(&response).map_err(Error::from)
    }

    fn invalid_request(&self, id: Option<Value>, message: String) -> Result<String> {
        let response = JsonRpcResponse::error(id, codes::INVALID_REQUEST, message);
        serde_json::to_string(&response).map_err(Error::from)
    }

    async fn handle_initialize(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            server_info: ServerInfo {
                name: "reporadar".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    async fn handle_tools_list(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let tools_value: Vec<Value> = get_tool_definitions()
            .iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect();

        Ok(JsonRpcResponse::success(id, json!({ "tools": tools_value })))
    }

    /// Executes the requested tool. Tool failures are successful JSON-RPC
    /// responses carrying an error tool result; only malformed params are
    /// protocol errors.
    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let tool_params: ToolCallParams = match serde_json::from_value(params) {
            Ok(p) => p,
            Err(e) => {
                return Ok(JsonRpcResponse::error(
                    id,
                    codes::INVALID_PARAMS,
                    format!("Invalid params: {}", e),
                ));
            }
        };

        tracing::info!(tool = %tool_params.name, "Tool call");

        let tool_result =
            match handle_tool_call(&self.config, &tool_params.name, tool_params.arguments).await {
                Ok(result) => ToolResult::text(serde_json::to_string_pretty(&result)?),
                Err(e) => {
                    tracing::warn!(tool = %tool_params.name, kind = e.kind(), error = %e, "Tool failed");
                    ToolResult::error(serde_json::to_string_pretty(&e.payload())?)
                }
            };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(tool_result)?))
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Check if the server is initialized
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get available tools
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }
}
