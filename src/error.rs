// ABOUTME: Defines all error types for bvbrc-mcp using thiserror.
// ABOUTME: RPC and tool errors are unified under BvbrcError with a closed ErrorKind.

/// Coarse failure category exposed to callers of the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The HTTP round trip failed or returned a non-2xx status.
    Transport,
    /// The server answered with a JSON-RPC error or an unusable payload.
    RpcFault,
    /// Tool arguments could not be interpreted.
    Validation,
    /// Unknown tool, unknown resource, or anything else.
    Unknown,
}

/// Top-level error type for bvbrc-mcp.
#[derive(Debug, thiserror::Error)]
pub enum BvbrcError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BvbrcError {
    /// Classify this error into one of the closed error kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BvbrcError::Rpc(e) => e.kind(),
            BvbrcError::Tool(e) => e.kind(),
            BvbrcError::Config(_) | BvbrcError::Json(_) => ErrorKind::Unknown,
        }
    }
}

/// Errors from JSON-RPC calls against the BV-BRC services.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("HTTP error {status}: {body}")]
    Transport { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("RPC Error {code}: {message}")]
    Fault { code: i64, message: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RpcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RpcError::Transport { .. } | RpcError::Connection(_) => ErrorKind::Transport,
            RpcError::Fault { .. } | RpcError::Malformed(_) | RpcError::Json(_) => {
                ErrorKind::RpcFault
            }
        }
    }
}

/// Errors from tool routing and argument handling.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    NotFound(String),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Unknown resource: {0}")]
    UnknownResource(String),
}

impl ToolError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ToolError::InvalidParams(_) => ErrorKind::Validation,
            ToolError::NotFound(_) | ToolError::UnknownResource(_) => ErrorKind::Unknown,
        }
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(e: serde_json::Error) -> Self {
        ToolError::InvalidParams(e.to_string())
    }
}
