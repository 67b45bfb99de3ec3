// ABOUTME: MCP stdio server - reads JSON-RPC lines, dispatches through the Router,
// ABOUTME: and writes one response line per request until the input closes.

pub mod protocol;

use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::error::ErrorKind;
use crate::router::Router;
use protocol::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, METHOD_NOT_FOUND, PARSE_ERROR, PROTOCOL_VERSION, ResourceContent,
    ResourceReadParams, ToolCallParams, ToolCallResult,
};

pub const SERVER_NAME: &str = "bvbrc-mcp";

/// Async MCP server over newline-delimited JSON-RPC 2.0.
///
/// Transport-agnostic: the binary connects it to stdin/stdout, tests use
/// `tokio::io::duplex` streams.
pub struct McpServer {
    router: Router,
}

impl McpServer {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Run the server loop until `input` reaches EOF.
    pub async fn run<R, W>(&self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: tokio::io::AsyncRead + Unpin,
        W: tokio::io::AsyncWrite + Unpin,
    {
        let mut lines = BufReader::new(input).lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line).await {
                write_jsonl(&mut output, &response).await?;
            }
        }
        tracing::info!("input closed, shutting down");
        Ok(())
    }

    /// Handle one raw line. Returns `None` for notifications.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: serde_json::Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    None,
                    JsonRpcError::new(PARSE_ERROR, format!("Parse error: {}", e)),
                ));
            }
        };
        let id = value.get("id").cloned();
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle(request).await,
            Err(e) => Some(JsonRpcResponse::error(
                id,
                JsonRpcError::new(INVALID_REQUEST, e.to_string()),
            )),
        }
    }

    /// Handle a parsed request. Returns `None` for notifications.
    pub async fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            tracing::debug!(method = %request.method, "notification");
            return None;
        }

        let id = request.id.clone();
        let outcome = match request.method.as_str() {
            "initialize" => Ok(server_info()),
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => Ok(serde_json::json!({ "tools": self.router.tool_definitions() })),
            "tools/call" => self.tools_call(request.params).await,
            "resources/list" => {
                Ok(serde_json::json!({ "resources": self.router.list_resources() }))
            }
            "resources/read" => self.resources_read(request.params).await,
            other => Err(JsonRpcError::new(
                METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            )),
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    async fn tools_call(&self, params: serde_json::Value) -> Result<serde_json::Value, JsonRpcError> {
        let params: ToolCallParams = serde_json::from_value(params)
            .map_err(|e| JsonRpcError::new(INVALID_PARAMS, e.to_string()))?;

        tracing::debug!(tool = %params.name, "tools/call");
        let result = self.router.call(&params.name, params.arguments).await;
        to_value(&ToolCallResult::from(result))
    }

    async fn resources_read(
        &self,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, JsonRpcError> {
        let params: ResourceReadParams = serde_json::from_value(params)
            .map_err(|e| JsonRpcError::new(INVALID_PARAMS, e.to_string()))?;

        let text = self.router.read_resource(&params.uri).await.map_err(|e| {
            let code = match e.kind() {
                ErrorKind::Unknown => INVALID_PARAMS,
                _ => INTERNAL_ERROR,
            };
            JsonRpcError::new(code, e.to_string())
        })?;

        to_value(&serde_json::json!({
            "contents": [ResourceContent {
                uri: params.uri,
                mime_type: "application/json".to_string(),
                text,
            }]
        }))
    }
}

/// Capabilities advertised in the `initialize` response.
fn server_info() -> serde_json::Value {
    serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {},
            "resources": {}
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

fn to_value<T: Serialize>(value: &T) -> Result<serde_json::Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::new(INTERNAL_ERROR, e.to_string()))
}

/// Write a serializable value as a single JSON line.
async fn write_jsonl<W, T>(writer: &mut W, value: &T) -> std::io::Result<()>
where
    W: tokio::io::AsyncWrite + Unpin,
    T: Serialize,
{
    let json = serde_json::to_string(value).map_err(std::io::Error::other)?;
    writer.write_all(json.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

    use super::*;
    use crate::client::testing::{RecordingTransport, client_with};

    fn server(transport: Arc<RecordingTransport>) -> McpServer {
        McpServer::new(Router::new(Arc::new(client_with(transport))))
    }

    async fn request(server: &McpServer, body: serde_json::Value) -> serde_json::Value {
        let response = server.handle_line(&body.to_string()).await.unwrap();
        serde_json::to_value(response).unwrap()
    }

    #[tokio::test]
    async fn test_initialize() {
        let server = server(RecordingTransport::new());
        let resp = request(&server, json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}})).await;

        assert_eq!(resp["id"], 1);
        assert_eq!(resp["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(resp["result"]["serverInfo"]["name"], "bvbrc-mcp");
        assert!(resp["result"]["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn test_notification_gets_no_response() {
        let server = server(RecordingTransport::new());
        let line = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
        assert!(server.handle_line(line).await.is_none());
    }

    #[tokio::test]
    async fn test_tools_list() {
        let server = server(RecordingTransport::new());
        let resp = request(&server, json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"})).await;

        let tools = resp["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 16);
        assert_eq!(tools[0]["name"], "workspace_list");
        assert!(tools[0]["inputSchema"].is_object());
    }

    #[tokio::test]
    async fn test_tools_call_error_is_result_not_rpc_error() {
        let server = server(RecordingTransport::new());
        let resp = request(
            &server,
            json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": {"name": "bogus", "arguments": {}}}),
        )
        .await;

        assert!(resp.get("error").is_none());
        assert_eq!(resp["result"]["isError"], true);
        assert_eq!(resp["result"]["content"][0]["text"], "Error: Unknown tool: bogus");
    }

    #[tokio::test]
    async fn test_resources_read_unknown_uri() {
        let server = server(RecordingTransport::new());
        let resp = request(
            &server,
            json!({"jsonrpc": "2.0", "id": 4, "method": "resources/read", "params": {"uri": "bvbrc://nope"}}),
        )
        .await;
        assert_eq!(resp["error"]["code"], INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_resources_read_workspace_types() {
        let server = server(RecordingTransport::new());
        let resp = request(
            &server,
            json!({"jsonrpc": "2.0", "id": 5, "method": "resources/read", "params": {"uri": "bvbrc://workspace-types"}}),
        )
        .await;
        let content = &resp["result"]["contents"][0];
        assert_eq!(content["uri"], "bvbrc://workspace-types");
        assert!(content["text"].as_str().unwrap().contains("\"job_result\""));
    }

    #[tokio::test]
    async fn test_parse_error_and_unknown_method() {
        let server = server(RecordingTransport::new());

        let resp = serde_json::to_value(server.handle_line("{not json").await.unwrap()).unwrap();
        assert_eq!(resp["error"]["code"], PARSE_ERROR);

        let resp = request(&server, json!({"jsonrpc": "2.0", "id": 6, "method": "prompts/list"})).await;
        assert_eq!(resp["error"]["code"], METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_run_over_duplex() {
        let transport = RecordingTransport::new().respond(json!([[{"id": "Date", "label": "Date"}]]));
        let server = server(transport.clone());

        let (mut client_end, server_end) = tokio::io::duplex(64 * 1024);
        let (server_read, server_write) = tokio::io::split(server_end);

        let lines = [
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/call", "params": {"name": "apps_list"}}),
        ];
        for line in &lines {
            client_end.write_all(line.to_string().as_bytes()).await.unwrap();
            client_end.write_all(b"\n").await.unwrap();
        }
        client_end.shutdown().await.unwrap();

        server.run(server_read, server_write).await.unwrap();

        let mut reader = BufReader::new(client_end).lines();
        let first: serde_json::Value =
            serde_json::from_str(&reader.next_line().await.unwrap().unwrap()).unwrap();
        let second: serde_json::Value =
            serde_json::from_str(&reader.next_line().await.unwrap().unwrap()).unwrap();

        assert_eq!(first["id"], 1);
        assert_eq!(second["id"], 2);
        let text = second["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("\"label\": \"Date\""));
        assert_eq!(transport.only_call().request.method, "AppService.enumerate_apps");
    }
}
