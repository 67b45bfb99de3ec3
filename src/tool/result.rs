// ABOUTME: Defines the ToolResult type - the text handed back to the MCP host
// ABOUTME: along with whether it represents a failed call.

/// Result of a tool call as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
    /// The output content.
    pub content: String,

    /// Whether this result represents an error.
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful text result.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    /// Create an error result rendered as `Error: <message>`.
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self {
            content: format!("Error: {}", message),
            is_error: true,
        }
    }
}

impl Default for ToolResult {
    fn default() -> Self {
        Self::text("")
    }
}
