// ABOUTME: Router - maps tool names to handlers and owns the outer error boundary.
// ABOUTME: Any per-call failure becomes an "Error: <message>" result, never a crash.

use std::sync::Arc;

use crate::client::BvbrcClient;
use crate::error::{BvbrcError, ToolError};
use crate::resources::{self, ResourceInfo};
use crate::tool::{Registry, ToolDefinition, ToolResult};
use crate::tools;

/// Dispatches catalog calls to the BV-BRC client.
pub struct Router {
    client: Arc<BvbrcClient>,
    registry: Registry,
}

impl Router {
    /// Create a router over the full tool catalog.
    pub fn new(client: Arc<BvbrcClient>) -> Self {
        let registry = tools::catalog(client.clone());
        Self { client, registry }
    }

    pub fn client(&self) -> &BvbrcClient {
        &self.client
    }

    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.registry.to_definitions()
    }

    /// Run a tool by name. Errors are returned, not converted.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<String, BvbrcError> {
        let tool = self
            .registry
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;
        tool.execute(arguments).await
    }

    /// Run a tool by name, converting any failure into an error result.
    pub async fn call(&self, name: &str, arguments: serde_json::Value) -> ToolResult {
        match self.dispatch(name, arguments).await {
            Ok(text) => ToolResult::text(text),
            Err(e) => {
                tracing::warn!(tool = name, kind = ?e.kind(), error = %e, "tool call failed");
                ToolResult::error(e)
            }
        }
    }

    pub fn list_resources(&self) -> Vec<ResourceInfo> {
        resources::list_resources()
    }

    pub async fn read_resource(&self, uri: &str) -> Result<String, BvbrcError> {
        resources::read_resource(&self.client, uri).await
    }
}
