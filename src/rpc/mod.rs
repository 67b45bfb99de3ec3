// ABOUTME: RPC module - JSON-RPC 1.1 envelopes and the HTTP transport seam.
// ABOUTME: The transport moves envelopes; payload unwrapping belongs to the client.

mod http;
mod types;

pub use http::HttpTransport;
pub use types::*;

use async_trait::async_trait;

use crate::error::RpcError;

/// Trait for JSON-RPC transport implementations.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `request` to `endpoint` and return the decoded response envelope.
    ///
    /// `token` is sent verbatim as the `Authorization` header when present.
    async fn send(
        &self,
        endpoint: &str,
        request: &RpcRequest,
        token: Option<&str>,
    ) -> Result<RpcResponse, RpcError>;
}
