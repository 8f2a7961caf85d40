//! MCP tool implementations.
//!
//! Each tool:
//! 1. Parses and validates input parameters
//! 2. Issues one arXiv API request through the shared client
//! 3. Formats results as Markdown or JSON

mod fetch;
mod search;

pub use fetch::*;
pub use search::*;

use std::sync::Arc;

use crate::client::ArxivClient;
use crate::error::ToolResult;
use crate::formatters;
use crate::models::{Feed, ResponseFormat};

/// Tool execution context.
pub struct ToolContext {
    /// API client.
    pub client: Arc<ArxivClient>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(client: Arc<ArxivClient>) -> Self {
        Self { client }
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "search_papers").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(
        &self,
        ctx: &ToolContext,
        input: serde_json::Value,
    ) -> ToolResult<String>;
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        // Search tools (3)
        Box::new(search::SearchPapersTool),
        Box::new(search::FindPapersByAuthorTool),
        Box::new(search::LatestFromCategoryTool),

        // Lookup tools (2)
        Box::new(fetch::GetPaperByIdTool),
        Box::new(fetch::GetPapersByIdsTool),
    ]
}

/// `response_format` property shared by every tool schema.
fn response_format_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "enum": ["markdown", "json"],
        "default": "markdown"
    })
}

/// Render a search page in the requested format.
fn render_search(feed: &Feed, format: ResponseFormat) -> ToolResult<String> {
    match format {
        ResponseFormat::Markdown => Ok(formatters::format_search_markdown(feed)),
        ResponseFormat::Json => Ok(serde_json::to_string_pretty(&formatters::format_feed_json(feed))?),
    }
}
