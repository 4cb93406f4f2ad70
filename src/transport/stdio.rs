//! Line-delimited JSON-RPC over stdin/stdout.

use std::io::{self, BufRead, Write};

use serde_json::Value;

use crate::error::TransportError;
use crate::mcp::McpServer;
use crate::mcp::protocol::{JsonRpcRequest, JsonRpcResponse};

/// Serve requests from `reader` until EOF, one response line per request.
pub fn serve<R: BufRead, W: Write>(
    server: &McpServer,
    reader: R,
    mut writer: W,
) -> Result<(), TransportError> {
    for line in reader.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::error!("Error reading input: {}", e);
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let response = match JsonRpcRequest::parse(trimmed.as_bytes()) {
            Ok(request) => server.handle_request(request),
            Err(error) => Some(JsonRpcResponse::failure(Value::Null, error)),
        };

        if let Some(response) = response {
            writeln!(writer, "{}", serde_json::to_string(&response)?)?;
            writer.flush()?;
        }
    }

    Ok(())
}

/// Serve on the process stdin/stdout
pub fn run(server: &McpServer) -> Result<(), TransportError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(server, stdin.lock(), stdout.lock())
}
