// ABOUTME: Test-only transport that records requests and replays canned results.
// ABOUTME: Lets client and tool tests assert exact method names and params.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use super::BvbrcClient;
use crate::auth::Token;
use crate::config::ClientConfig;
use crate::error::RpcError;
use crate::rpc::{RpcRequest, RpcResponse, Transport};

pub const APP_URL: &str = "http://app.test/services/app_service";
pub const WORKSPACE_URL: &str = "http://ws.test/services/Workspace";

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub endpoint: String,
    pub request: RpcRequest,
    pub token: Option<String>,
}

/// Replays queued responses in order; an exhausted queue answers `result: null`.
#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<VecDeque<RpcResponse>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a successful response carrying `result`.
    pub fn respond(self: Arc<Self>, result: Value) -> Arc<Self> {
        self.responses.lock().unwrap().push_back(RpcResponse {
            result,
            ..Default::default()
        });
        self
    }

    /// Queue a response with a populated `error` object.
    pub fn fault(self: Arc<Self>, code: i64, message: &str) -> Arc<Self> {
        self.responses.lock().unwrap().push_back(RpcResponse {
            error: Some(json!({"name": "JSONRPCError", "code": code, "message": message})),
            ..Default::default()
        });
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The single recorded call; panics if there is not exactly one.
    pub fn only_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one rpc call");
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(
        &self,
        endpoint: &str,
        request: &RpcRequest,
        token: Option<&str>,
    ) -> Result<RpcResponse, RpcError> {
        self.calls.lock().unwrap().push(RecordedCall {
            endpoint: endpoint.to_string(),
            request: request.clone(),
            token: token.map(str::to_string),
        });
        Ok(self.responses.lock().unwrap().pop_front().unwrap_or_default())
    }
}

pub fn config() -> ClientConfig {
    ClientConfig::new()
        .with_app_service_url(APP_URL)
        .with_workspace_url(WORKSPACE_URL)
}

/// An unauthenticated client over `transport`.
pub fn client_with(transport: Arc<RecordingTransport>) -> BvbrcClient {
    BvbrcClient::with_transport(config(), Token::empty(), transport)
}
