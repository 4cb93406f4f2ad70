//! Axum router for the MCP HTTP/JSON-RPC transport.
//! Routes: `POST <mcp_path>` (requests), `GET /health`, `GET /tools`.

use std::any::Any;
use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::error::TransportError;
use crate::mcp::McpServer;
use crate::mcp::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub server: Arc<McpServer>,
}

/// Builds the axum `Router` with all MCP routes.
///
/// `mcp_path` must start with `/`; `HttpServer::new` checks this up front.
pub fn build_router(state: AppState, mcp_path: &str) -> Router {
    let router = Router::new()
        .route(mcp_path, post(handle_mcp))
        .route("/health", get(handle_health))
        .route("/tools", get(handle_tools))
        .with_state(state);
    with_layers(router)
}

fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": state.server.server_name(),
        "version": env!("CARGO_PKG_VERSION"),
        "tools": state.server.registry().len(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn handle_tools(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({ "tools": state.server.registry().descriptors() }))
}

async fn handle_mcp(State(state): State<AppState>, body: Bytes) -> Response {
    let request = match JsonRpcRequest::parse(&body) {
        Ok(r) => r,
        Err(error) => {
            tracing::debug!(code = error.code, "rejected request body");
            return json_rpc_error(StatusCode::BAD_REQUEST, error);
        }
    };

    let Some(response) = state.server.handle_request(request) else {
        return StatusCode::NO_CONTENT.into_response();
    };

    match serde_json::to_string(&response) {
        Ok(json_str) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            json_str,
        )
            .into_response(),
        Err(e) => json_rpc_error(StatusCode::INTERNAL_SERVER_ERROR, JsonRpcError::internal(e)),
    }
}

/// JSON-RPC error envelope with `id: null`
fn json_rpc_error(status: StatusCode, error: JsonRpcError) -> Response {
    (status, Json(JsonRpcResponse::failure(Value::Null, error))).into_response()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(%message, "request handler panicked");
    json_rpc_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        JsonRpcError::internal(message),
    )
}

/// Axum-based HTTP server for the MCP JSON-RPC transport.
pub struct HttpServer {
    pub(crate) addr: String,
    pub(crate) mcp_path: String,
    pub(crate) state: AppState,
}

impl HttpServer {
    pub fn new(server: Arc<McpServer>, config: &ServerConfig) -> Result<Self, TransportError> {
        if !config.mcp_path.starts_with('/') {
            return Err(TransportError::InvalidPath(config.mcp_path.clone()));
        }

        Ok(Self {
            addr: config.bind_addr(),
            mcp_path: config.mcp_path.clone(),
            state: AppState { server },
        })
    }

    /// Starts the server and blocks until it exits or receives Ctrl-C.
    pub async fn run(self) -> Result<(), TransportError> {
        let listener = TcpListener::bind(&self.addr)
            .await
            .map_err(|e| TransportError::Bind {
                addr: self.addr.clone(),
                source: e,
            })?;

        tracing::info!(addr = %self.addr, path = %self.mcp_path, "MCP HTTP server ready");

        let router = build_router(self.state, &self.mcp_path);
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::Serve(e.to_string()))?;

        tracing::info!("MCP HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AppState {
            server: Arc::new(McpServer::default()),
        };
        build_router(state, "/mcp")
    }

    fn post_mcp(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/mcp")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("req")
    }

    async fn body_json(resp: Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .expect("req");
        let resp = app().oneshot(req).await.expect("resp");
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["tools"], 7);
    }

    #[tokio::test]
    async fn tools_endpoint_lists_descriptors() {
        let req = Request::builder()
            .uri("/tools")
            .body(Body::empty())
            .expect("req");
        let resp = app().oneshot(req).await.expect("resp");
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        let tools = body["tools"].as_array().expect("tools");
        assert_eq!(tools.len(), 7);
        assert!(tools.iter().all(|t| t.get("inputSchema").is_some()));
    }

    #[tokio::test]
    async fn mcp_parse_error_is_bad_request() {
        let resp = app().oneshot(post_mcp("not json")).await.expect("resp");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert!(body["id"].is_null());
        assert_eq!(body["error"]["code"], -32700);
        assert_eq!(body["error"]["message"], "Parse error");
    }

    #[tokio::test]
    async fn mcp_invalid_request_is_bad_request() {
        let resp = app().oneshot(post_mcp("[1, 2]")).await.expect("resp");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["error"]["code"], -32600);
    }

    #[tokio::test]
    async fn mcp_notification_returns_no_content() {
        let resp = app()
            .oneshot(post_mcp(r#"{"jsonrpc":"2.0","method":"initialized"}"#))
            .await
            .expect("resp");
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let bytes = axum::body::to_bytes(resp.into_body(), 1024)
            .await
            .expect("body");
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn mcp_unknown_method_is_ok_with_error() {
        let resp = app()
            .oneshot(post_mcp(r#"{"jsonrpc":"2.0","id":3,"method":"prompts/list"}"#))
            .await
            .expect("resp");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let body = body_json(resp).await;
        assert_eq!(body["id"], 3);
        assert_eq!(body["error"]["code"], -32601);
    }

    #[tokio::test]
    async fn mcp_tool_call_round_trip() {
        let resp = app()
            .oneshot(post_mcp(
                r#"{"jsonrpc":"2.0","id":9,"method":"tools/call","params":{"name":"transform_case","arguments":{"text":"HelloWorld","target":"kebab-case"}}}"#,
            ))
            .await
            .expect("resp");
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["result"]["structuredContent"]["transformed"], "hello-world");
    }

    #[tokio::test]
    async fn mcp_tool_failure_stays_http_ok() {
        let resp = app()
            .oneshot(post_mcp(
                r#"{"jsonrpc":"2.0","id":10,"method":"tools/call","params":{"name":"transform_case","arguments":{"text":"x","target":"not_a_case"}}}"#,
            ))
            .await
            .expect("resp");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["error"]["code"], -32603);
    }

    #[tokio::test]
    async fn panic_maps_to_internal_error() {
        let resp = handle_panic(Box::new("boom"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(body["error"]["code"], -32603);
        assert_eq!(body["error"]["message"], "Internal error: boom");
    }

    #[tokio::test]
    async fn panicking_route_returns_internal_error() {
        async fn explode() -> &'static str {
            panic!("boom")
        }

        let app = with_layers(Router::new().route("/explode", get(explode)));
        let req = Request::builder()
            .uri("/explode")
            .body(Body::empty())
            .expect("req");
        let resp = app.oneshot(req).await.expect("resp");
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert!(body["id"].is_null());
        assert_eq!(body["error"]["code"], -32603);
        assert_eq!(body["error"]["message"], "Internal error: boom");
    }

    #[test]
    fn new_uses_configured_address() {
        let config = ServerConfig {
            host: "127.0.0.1".into(),
            port: 9123,
            mcp_path: "/rpc".into(),
        };
        let server = HttpServer::new(Arc::new(McpServer::default()), &config).unwrap();
        assert_eq!(server.addr, "127.0.0.1:9123");
        assert_eq!(server.mcp_path, "/rpc");
    }

    #[test]
    fn new_rejects_path_without_leading_slash() {
        for path in ["mcp", ""] {
            let config = ServerConfig {
                mcp_path: path.into(),
                ..ServerConfig::default()
            };
            let err = HttpServer::new(Arc::new(McpServer::default()), &config)
                .err()
                .expect("path should be rejected");
            assert!(matches!(err, TransportError::InvalidPath(p) if p == path));
        }
    }
}
