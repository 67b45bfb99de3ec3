// ABOUTME: HTTP transport for JSON-RPC 1.1 communication.
// ABOUTME: One POST per call, raw token as Authorization, bounded by a timeout.

use std::time::Duration;

use async_trait::async_trait;

use super::{RpcRequest, RpcResponse, Transport};
use crate::error::RpcError;

/// HTTP transport - simple request/response over HTTP POST.
pub struct HttpTransport {
    http_client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, RpcError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("bvbrc-mcp/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http_client })
    }

    /// Create with a custom reqwest client.
    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        endpoint: &str,
        request: &RpcRequest,
        token: Option<&str>,
    ) -> Result<RpcResponse, RpcError> {
        let body = serde_json::to_vec(request)?;

        let mut req_builder = self
            .http_client
            .post(endpoint)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req_builder = req_builder.header("Authorization", token);
        }

        let response = req_builder.body(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RpcError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| RpcError::Malformed(format!("Invalid JSON-RPC response: {}", e)))
    }
}
