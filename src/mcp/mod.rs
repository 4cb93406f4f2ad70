pub(crate) mod handlers;
pub(crate) mod helpers;
pub mod protocol;
pub mod tools;

use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, methods};
use serde_json::{Value, json};

use crate::config::ProtocolConfig;
use tools::ToolRegistry;

/// MCP Server implementation
///
/// Holds only immutable data, so one instance can serve concurrent requests
/// behind an `Arc`.
pub struct McpServer {
    registry: ToolRegistry,
    protocol: ProtocolConfig,
}

impl McpServer {
    pub fn new(protocol: ProtocolConfig) -> Self {
        Self {
            registry: ToolRegistry::new(),
            protocol,
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn server_name(&self) -> &str {
        &self.protocol.server_name
    }

    /// Handle incoming JSON-RPC request
    ///
    /// Returns `None` for notifications, which never get a reply.
    pub fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        tracing::debug!(method = %request.method, id = ?request.id, "dispatching request");

        let result = match request.method.as_str() {
            methods::INITIALIZED | methods::NOTIFICATIONS_INITIALIZED => {
                tracing::info!("client finished initialization");
                return None;
            }
            methods::INITIALIZE => Ok(self.handle_initialize(&request.params)),
            methods::LIST_TOOLS => Ok(json!({ "tools": self.registry.descriptors() })),
            methods::CALL_TOOL => self.handle_tools_call(&request.params),
            other => Err(JsonRpcError::method_not_found(other)),
        };

        let id = request.id.unwrap_or(Value::Null);
        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(error) => JsonRpcResponse::failure(id, error),
        })
    }

    /// Handle initialize request
    fn handle_initialize(&self, params: &Value) -> Value {
        let protocol_version = params
            .get("protocolVersion")
            .and_then(|v| v.as_str())
            .unwrap_or(self.protocol.protocol_version.as_str());

        if let Some(client) = params.get("clientInfo") {
            tracing::info!(client = %client, protocol_version, "initialize");
        }

        json!({
            "protocolVersion": protocol_version,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": self.protocol.server_name,
                "version": env!("CARGO_PKG_VERSION")
            }
        })
    }

    /// Handle tools/call request
    fn handle_tools_call(&self, params: &Value) -> Result<Value, JsonRpcError> {
        let name = params
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| JsonRpcError::invalid_params("Missing tool name"))?;

        let tool = self
            .registry
            .get(name)
            .ok_or_else(|| JsonRpcError::unknown_tool(name))?;

        let empty = json!({});
        let arguments = match params.get("arguments") {
            None | Some(Value::Null) => &empty,
            Some(args) => args,
        };

        let output = tool.call(arguments).map_err(|e| {
            tracing::warn!(tool = name, error = %e, "tool execution failed");
            JsonRpcError::tool_failed(e)
        })?;

        let text = serde_json::to_string_pretty(&output).map_err(JsonRpcError::tool_failed)?;

        Ok(json!({
            "content": [{
                "type": "text",
                "text": text
            }],
            "structuredContent": output
        }))
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new(ProtocolConfig::default())
    }
}
