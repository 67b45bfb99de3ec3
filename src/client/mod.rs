// ABOUTME: BV-BRC client - JSON-RPC 1.1 calls against the app service and workspace.
// ABOUTME: Owns request ids, the auth token, and decoding into typed records.

mod apps;
mod types;
mod workspace;

pub use types::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;

use crate::auth::{Token, TokenSources};
use crate::config::ClientConfig;
use crate::error::RpcError;
use crate::rpc::{HttpTransport, RpcRequest, Transport};

/// Client for the BV-BRC JSON-RPC API.
pub struct BvbrcClient {
    config: ClientConfig,
    token: Token,
    transport: Arc<dyn Transport>,
    next_id: AtomicU64,
}

impl BvbrcClient {
    /// Create a client over HTTP, loading the token from the environment or dotfiles.
    pub fn new(config: ClientConfig) -> Result<Self, RpcError> {
        let token = TokenSources::default().resolve();
        Self::with_token(config, token)
    }

    /// Create a client over HTTP with an explicit token.
    pub fn with_token(config: ClientConfig, token: Token) -> Result<Self, RpcError> {
        let transport = Arc::new(HttpTransport::new(config.timeout)?);
        Ok(Self::with_transport(config, token, transport))
    }

    /// Create a client over a custom transport.
    pub fn with_transport(config: ClientConfig, token: Token, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            token,
            transport,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Username from the token's `un` segment, or empty when unauthenticated.
    pub fn username(&self) -> &str {
        self.token.username()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_authenticated()
    }

    /// Call an `AppService.*` method and return its raw `result`.
    pub async fn call_app_service(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        self.rpc_call(&self.config.app_service_url, method, params).await
    }

    /// Call a `Workspace.*` method and return its raw `result`.
    pub async fn call_workspace(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        self.rpc_call(&self.config.workspace_url, method, params).await
    }

    async fn rpc_call(&self, endpoint: &str, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let request = RpcRequest::new(id, method, params);
        tracing::debug!(id, method, endpoint, "sending rpc request");

        let response = self
            .transport
            .send(endpoint, &request, self.token.header_value())
            .await
            .inspect_err(|e| tracing::warn!(id, method, error = %e, "rpc transport failed"))?;

        response
            .into_result()
            .inspect_err(|e| tracing::warn!(id, method, error = %e, "rpc call faulted"))
    }
}

/// Unwrap the single-element list most methods wrap their payload in.
fn first(result: Value) -> Option<Value> {
    match result {
        Value::Array(items) => items.into_iter().next().filter(|v| !v.is_null()),
        _ => None,
    }
}

/// Elements of a list payload; anything else is treated as empty.
fn items(payload: Option<Value>) -> Vec<Value> {
    match payload {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

#[cfg(test)]
pub(crate) mod testing;

#[cfg(test)]
mod apps_test;
