//! Text Utils MCP Server
//!
//! This binary serves the text tools over stdio, one JSON-RPC message per
//! line, for clients that spawn the server as a subprocess.

use anyhow::Result;

use text_utils::{Config, McpServer, logging, transport};

fn main() -> Result<()> {
    let config = Config::load()?;
    logging::init(&config.logging.filter);

    let server = McpServer::new(config.protocol);
    tracing::info!(tools = server.registry().len(), "Text Utils MCP server starting on stdio");

    transport::stdio::run(&server)?;

    tracing::info!("stdin closed, shutting down");
    Ok(())
}
