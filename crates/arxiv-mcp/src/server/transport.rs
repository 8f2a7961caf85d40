//! Streamable HTTP transport.
//!
//! A single `POST /mcp` endpoint carries JSON-RPC requests; each request
//! gets its JSON-RPC response in the HTTP body. There is no server-initiated
//! traffic, so no SSE stream is offered.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::protocol::{JsonRpcRequest, JsonRpcResponse, McpHandler};

/// Header carrying the session id issued on `initialize`.
pub const SESSION_HEADER: &str = "Mcp-Session-Id";

/// Create the HTTP router for MCP.
pub fn create_router(handler: Arc<McpHandler>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/mcp", post(handle_mcp_post))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(handler)
}

async fn health_check(State(handler): State<Arc<McpHandler>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "arxiv-mcp",
        "version": env!("CARGO_PKG_VERSION"),
        "tools": handler.tool_count()
    }))
}

/// Handle POST requests to /mcp
async fn handle_mcp_post(State(handler): State<Arc<McpHandler>>, body: Bytes) -> Response {
    let req: JsonRpcRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => {
            tracing::warn!(error = %e, "Unparseable request body");
            return (StatusCode::BAD_REQUEST, Json(JsonRpcResponse::parse_error(&e))).into_response();
        }
    };

    tracing::debug!(method = %req.method, "Handling MCP POST request");

    let Some(response) = handler.handle(&req).await else {
        return StatusCode::ACCEPTED.into_response();
    };

    let mut res = Json(response).into_response();

    if req.method == "initialize" {
        let session_id = uuid::Uuid::new_v4().to_string();
        if let Ok(value) = HeaderValue::from_str(&session_id) {
            res.headers_mut().insert(SESSION_HEADER, value);
        }
        tracing::info!(session_id = %session_id, "Issued MCP session");
    }

    res
}
