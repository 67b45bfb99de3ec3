// ABOUTME: Root module for bvbrc-mcp - an MCP tool surface over BV-BRC services.
// ABOUTME: Re-exports the client, router, and server types from submodules.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod prelude;
pub mod resources;
pub mod router;
pub mod rpc;
pub mod server;
pub mod tool;
pub mod tools;

pub use client::BvbrcClient;
pub use config::ClientConfig;
pub use error::{BvbrcError, ErrorKind};
pub use router::Router;
pub use server::McpServer;
