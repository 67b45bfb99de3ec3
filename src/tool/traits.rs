// ABOUTME: Defines the Tool trait - a named, schema-described catalog operation.
// ABOUTME: Tools take JSON arguments and return text or a typed error.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{BvbrcError, ToolError};

/// An operation exposed through the MCP tool catalog.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description for the MCP host.
    fn description(&self) -> &str;

    /// Returns the JSON Schema for the tool's input parameters.
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool. Errors propagate to the router boundary.
    async fn execute(&self, params: serde_json::Value) -> Result<String, BvbrcError>;
}

/// Deserialize tool arguments. A missing argument object reads as `{}`.
pub fn parse_args<T: DeserializeOwned>(params: serde_json::Value) -> Result<T, ToolError> {
    let params = if params.is_null() {
        serde_json::Value::Object(Default::default())
    } else {
        params
    };
    Ok(serde_json::from_value(params)?)
}
