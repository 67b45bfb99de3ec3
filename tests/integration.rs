// ABOUTME: Integration tests driving the router and MCP server against a mock BV-BRC.
// ABOUTME: Exercises the real HTTP transport end to end with wiremock.

use std::sync::Arc;
use std::time::Duration;

use bvbrc_mcp::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "un=alice@patricbrc.org|tokenid=abc|sig=deadbeef";

fn config(server: &MockServer) -> ClientConfig {
    ClientConfig::new()
        .with_app_service_url(format!("{}/services/app_service", server.uri()))
        .with_workspace_url(format!("{}/services/Workspace", server.uri()))
        .with_timeout(Duration::from_secs(5))
}

fn router(server: &MockServer, token: Token) -> Router {
    let client = BvbrcClient::with_token(config(server), token).expect("client should build");
    Router::new(Arc::new(client))
}

fn rpc_result(result: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"id": "1", "version": "1.1", "result": result}))
}

#[tokio::test]
async fn test_apps_list_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/app_service"))
        .and(header("Authorization", TOKEN))
        .and(body_partial_json(json!({"method": "AppService.enumerate_apps", "params": []})))
        .respond_with(rpc_result(json!([[
            {"id": "GenomeAssembly2", "label": "Assemble", "description": "Assemble reads", "parameters": []}
        ]])))
        .expect(1)
        .mount(&server)
        .await;

    let router = router(&server, Token::new(TOKEN));
    assert_eq!(router.client().username(), "alice@patricbrc.org");

    let result = router.call("apps_list", json!({})).await;
    assert!(!result.is_error);
    assert_eq!(
        serde_json::from_str::<Value>(&result.content).unwrap(),
        json!([{"id": "GenomeAssembly2", "label": "Assemble", "description": "Assemble reads"}])
    );
}

#[tokio::test]
async fn test_unauthenticated_requests_carry_no_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/Workspace"))
        .respond_with(rpc_result(json!([{"/alice/home": []}])))
        .mount(&server)
        .await;

    let router = router(&server, Token::empty());
    let result = router.call("workspace_list", json!({"path": "/alice/home"})).await;
    assert_eq!(result.content, "{\n  \"/alice/home\": []\n}");

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].headers.get("Authorization").is_none());

    let body: Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body["id"], "1");
    assert_eq!(body["version"], "1.1");
    assert_eq!(body["method"], "Workspace.ls");
}

#[tokio::test]
async fn test_request_ids_increase_across_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(rpc_result(json!([1])))
        .mount(&server)
        .await;

    let router = router(&server, Token::new(TOKEN));
    router.call("job_cancel", json!({"task_id": "1"})).await;
    router.call("job_cancel", json!({"task_id": "2"})).await;

    let ids: Vec<Value> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| serde_json::from_slice::<Value>(&r.body).unwrap()["id"].clone())
        .collect();
    assert_eq!(ids, vec![json!("1"), json!("2")]);
}

#[tokio::test]
async fn test_http_failure_becomes_error_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let router = router(&server, Token::new(TOKEN));
    let err = router.dispatch("job_status", json!({"task_ids": ["1"]})).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);

    let result = router.call("job_status", json!({"task_ids": ["1"]})).await;
    assert!(result.is_error);
    assert_eq!(result.content, "Error: HTTP error 500: boom");
}

#[tokio::test]
async fn test_rpc_fault_becomes_error_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "version": "1.1",
            "error": {"name": "JSONRPCError", "code": -32603, "message": "_ERROR_Object not found_ERROR_"}
        })))
        .mount(&server)
        .await;

    let router = router(&server, Token::new(TOKEN));
    let result = router.call("workspace_get", json!({"path": "/alice/home/missing"})).await;
    assert!(result.is_error);
    assert_eq!(result.content, "Error: RPC Error -32603: _ERROR_Object not found_ERROR_");
}

#[tokio::test]
async fn test_server_tools_call_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/Workspace"))
        .and(body_partial_json(json!({
            "method": "Workspace.set_permissions",
            "params": [{"path": "/alice/home/x", "permissions": [["bob", "w"]]}]
        })))
        .respond_with(rpc_result(json!([[]])))
        .expect(1)
        .mount(&server)
        .await;

    let mcp = McpServer::new(router(&server, Token::new(TOKEN)));
    let line = json!({
        "jsonrpc": "2.0",
        "id": 9,
        "method": "tools/call",
        "params": {
            "name": "workspace_share",
            "arguments": {"path": "/alice/home/x", "user": "bob", "permission": "w"}
        }
    })
    .to_string();

    let response = serde_json::to_value(mcp.handle_line(&line).await.unwrap()).unwrap();
    assert_eq!(response["id"], 9);
    assert_eq!(
        response["result"],
        json!({"content": [{"type": "text", "text": "Permission 'w' set for bob on /alice/home/x"}]})
    );
}
