//! Text Utils - text manipulation tools over the Model Context Protocol
//!
//! Seven pure text transforms (reverse, analyze, case conversion, slugify,
//! URL extraction, truncation, token estimation) behind a JSON-RPC 2.0
//! dispatcher, served over HTTP or stdio.

pub mod config;
pub mod error;
pub mod logging;
pub mod mcp;
pub mod text;
pub mod transport;

pub use config::Config;
pub use error::{ToolError, TransportError};
pub use mcp::McpServer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
