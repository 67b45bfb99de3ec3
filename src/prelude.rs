// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use bvbrc_mcp::prelude::*;` to get started quickly.

pub use crate::auth::{Token, TokenSources};
pub use crate::client::{AppDescription, BvbrcClient, Task, WorkspaceObject};
pub use crate::config::ClientConfig;
pub use crate::error::{BvbrcError, ErrorKind, RpcError, ToolError};
pub use crate::router::Router;
pub use crate::rpc::{HttpTransport, Transport};
pub use crate::server::McpServer;
pub use crate::tool::{Registry, Tool, ToolResult};
