//! Error types for text-utils

use thiserror::Error;

/// Errors raised while executing a tool.
///
/// These never escape the dispatcher: `tools/call` turns them into a
/// `-32603` JSON-RPC error carrying the display text.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Missing required argument '{0}'")]
    MissingArgument(&'static str),

    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("Unknown target case '{target}'. Valid: {valid}")]
    UnknownCase { target: String, valid: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from the HTTP and stdio transports.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("failed to bind on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid MCP path '{0}': must start with '/'")]
    InvalidPath(String),

    #[error("server error: {0}")]
    Serve(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
