//! JSON-RPC level tests: every tool call goes through `handle_message` as a
//! client would send it, and responses are checked as the client sees them.

use pretty_assertions::assert_eq;
use radar_mcp::{RadarMcpServer, ServerConfig};
use radar_test_utils::git::repo_with_commit;
use serde_json::{Value, json};
use tempfile::TempDir;

async fn server_with_repo() -> (TempDir, RadarMcpServer) {
    let temp = TempDir::new().unwrap();
    repo_with_commit(&temp.path().join("repos/proj"));
    let mut server = RadarMcpServer::new(ServerConfig::with_clone_root(temp.path().join("repos")));
    server.initialize().await.unwrap();
    (temp, server)
}

async fn send(server: &RadarMcpServer, request: Value) -> Value {
    let response = server.handle_message(&request.to_string()).await.unwrap();
    serde_json::from_str(&response).unwrap()
}

async fn call_tool(server: &RadarMcpServer, id: i64, name: &str, arguments: Value) -> Value {
    send(
        server,
        json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "tools/call",
            "params": { "name": name, "arguments": arguments }
        }),
    )
    .await
}

/// Parses the text content of a tool result back into JSON.
fn tool_payload(response: &Value) -> Value {
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}

#[tokio::test]
async fn test_response_preserves_request_id() {
    let (_temp, server) = server_with_repo().await;

    let numeric = send(&server, json!({"jsonrpc": "2.0", "id": 42, "method": "ping"})).await;
    let string = send(&server, json!({"jsonrpc": "2.0", "id": "abc", "method": "ping"})).await;

    assert_eq!(numeric["id"], 42);
    assert_eq!(string["id"], "abc");
    assert_eq!(numeric["jsonrpc"], "2.0");
}

#[tokio::test]
async fn test_initialize_advertises_tools_only() {
    let (_temp, server) = server_with_repo().await;

    let response = send(
        &server,
        json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
    )
    .await;

    let result = &response["result"];
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "reporadar");
    assert!(result["capabilities"]["tools"].is_object());
    assert!(result["capabilities"].get("resources").is_none());
}

#[tokio::test]
async fn test_tools_list_names() {
    let (_temp, server) = server_with_repo().await;

    let response = send(&server, json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"})).await;

    let mut names: Vec<&str> = response["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "clone_repo",
            "generate_tree",
            "push",
            "read_file",
            "stage_and_commit",
            "unstage_all",
            "unstage_paths",
            "write_file",
        ]
    );
    assert!(response["result"]["tools"][0]["inputSchema"].is_object());
}

#[tokio::test]
async fn test_successful_call_has_no_error_flag() {
    let (_temp, server) = server_with_repo().await;

    let response = call_tool(&server, 3, "read_file", json!({"repo": "proj", "path": "README.md"})).await;

    assert!(response.get("error").is_none());
    assert!(response["result"].get("isError").is_none());
    assert_eq!(tool_payload(&response)["content"], "# Test");
}

#[tokio::test]
async fn test_tool_failures_share_one_shape() {
    let (_temp, server) = server_with_repo().await;

    let cases = [
        ("read_file", json!({"repo": "proj", "path": "missing.txt"}), "not_found"),
        ("read_file", json!({"repo": "proj", "path": "../escape"}), "path_escape"),
        ("write_file", json!({"repo": "ghost", "path": "a", "content": ""}), "repo_not_found"),
        ("write_file", json!({"repo": "proj", "path": ".", "content": ""}), "invalid_arguments"),
        ("unstage_all", json!({"repo": "../up"}), "invalid_repo_name"),
        ("push", json!({"repo": "proj"}), "remote_not_found"),
        ("push", json!({"repo": "proj", "remote": "origin", "branch": 7}), "invalid_arguments"),
        ("format_disk", json!({}), "unknown_tool"),
    ];

    for (id, (tool, arguments, kind)) in cases.into_iter().enumerate() {
        let response = call_tool(&server, id as i64, tool, arguments).await;

        assert!(response.get("error").is_none(), "{tool}: tool errors are not protocol errors");
        assert_eq!(response["result"]["isError"], true, "{tool}");
        let payload = tool_payload(&response);
        assert_eq!(payload["kind"], kind, "{tool}: {payload}");
        assert!(payload["error"].is_string(), "{tool}");
    }
}

#[tokio::test]
async fn test_read_not_found_payload_is_exact() {
    let (_temp, server) = server_with_repo().await;

    let response = call_tool(&server, 8, "read_file", json!({"repo": "proj", "path": "nope"})).await;

    assert_eq!(
        tool_payload(&response),
        json!({"kind": "not_found", "error": "file not found"})
    );
}

#[tokio::test]
async fn test_write_then_read_round_trip_through_protocol() {
    let (temp, server) = server_with_repo().await;

    let write = call_tool(
        &server,
        10,
        "write_file",
        json!({"repo": "proj", "path": "notes/todo.md", "content": "buy milk"}),
    )
    .await;
    assert!(write["result"].get("isError").is_none());
    assert!(temp.path().join("repos/proj/notes/todo.md").is_file());

    let read = call_tool(
        &server,
        11,
        "read_file",
        json!({"repo": "proj", "path": "notes/todo.md", "max_chars": 3}),
    )
    .await;
    let payload = tool_payload(&read);
    assert_eq!(payload["content"], "buy");
    assert_eq!(payload["truncated"], true);
}

#[tokio::test]
async fn test_notification_gets_no_response() {
    let (_temp, server) = server_with_repo().await;

    let response = server
        .handle_message(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
        .await
        .unwrap();
    assert!(response.is_empty());
}
