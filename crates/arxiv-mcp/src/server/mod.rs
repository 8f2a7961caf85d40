//! MCP server implementation.
//!
//! Provides both stdio (for desktop MCP hosts) and HTTP transports over a
//! shared [`McpHandler`].

pub mod protocol;
pub mod stdio;
pub mod transport;

use std::net::SocketAddr;
use std::sync::Arc;

pub use protocol::{JsonRpcRequest, JsonRpcResponse, McpHandler};

use crate::client::ArxivClient;
use crate::tools::{self, ToolContext};

/// MCP server for arXiv.
pub struct McpServer {
    handler: Arc<McpHandler>,
}

impl McpServer {
    /// Create a new MCP server with every tool registered.
    #[must_use]
    pub fn new(client: ArxivClient) -> Self {
        let ctx = ToolContext::new(Arc::new(client));
        let handler = McpHandler::new(tools::register_all_tools(), ctx);

        Self { handler: Arc::new(handler) }
    }

    /// Run the server in stdio mode.
    ///
    /// # Errors
    ///
    /// Returns error on I/O failure.
    pub async fn run_stdio(self) -> anyhow::Result<()> {
        tracing::info!("Starting MCP server in stdio mode");
        tracing::info!("Registered {} tools", self.handler.tool_count());

        stdio::run_stdio(&self.handler).await
    }

    /// Run the server in HTTP mode.
    ///
    /// # Errors
    ///
    /// Returns error on server failure.
    pub async fn run_http(self, port: u16) -> anyhow::Result<()> {
        tracing::info!("Starting MCP server in HTTP mode on port {}", port);
        tracing::info!("Registered {} tools", self.handler.tool_count());

        let router = transport::create_router(Arc::clone(&self.handler));
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        tracing::info!("HTTP server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

impl std::fmt::Debug for McpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpServer").field("tools", &self.handler.tool_count()).finish()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
