// ABOUTME: Tool module - defines tools, the registry, and result formatting.
// ABOUTME: Core abstraction behind the MCP tool catalog.

mod format;
mod registry;
mod result;
mod traits;

pub use format::*;
pub use registry::*;
pub use result::*;
pub use traits::*;
