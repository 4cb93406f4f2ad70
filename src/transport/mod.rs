//! Transports that carry JSON-RPC messages to and from [`McpServer`](crate::mcp::McpServer).

pub mod http;
pub mod stdio;

pub use http::{AppState, HttpServer, build_router};
