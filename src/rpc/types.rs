// ABOUTME: Defines JSON-RPC 1.1 protocol types - request and response envelopes
// ABOUTME: as spoken by the BV-BRC app service and workspace endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RpcError;

pub const RPC_VERSION: &str = "1.1";

/// A JSON-RPC 1.1 request. Parameters are always positional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcRequest {
    pub id: String,
    pub method: String,
    pub version: String,
    pub params: Vec<Value>,
}

impl RpcRequest {
    pub fn new(id: u64, method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            id: id.to_string(),
            method: method.into(),
            version: RPC_VERSION.to_string(),
            params,
        }
    }
}

/// A JSON-RPC 1.1 response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RpcResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub result: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl RpcResponse {
    /// Return `result` verbatim, or the server fault if `error` is populated.
    pub fn into_result(self) -> Result<Value, RpcError> {
        match self.error {
            Some(error) if is_populated(&error) => Err(fault_from(&error)),
            _ => Ok(self.result),
        }
    }
}

fn is_populated(error: &Value) -> bool {
    match error {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Number(_) => true,
    }
}

fn fault_from(error: &Value) -> RpcError {
    let code = match error.get("code") {
        Some(Value::Number(n)) => n.as_i64().unwrap_or_default(),
        Some(Value::String(s)) => s.parse().unwrap_or_default(),
        _ => 0,
    };
    let message = match error.get("message") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None if error.is_string() => error.as_str().unwrap_or_default().to_string(),
        None => error.to_string(),
    };
    RpcError::Fault { code, message }
}
