//! Lookup tools: get_paper_by_id, get_papers_by_ids.

use serde_json::json;

use super::{McpTool, ToolContext, response_format_schema};
use crate::config::limits;
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::{Paper, PaperByIdInput, PapersByIdsInput, ResponseFormat};

async fn fetch_and_render(
    ctx: &ToolContext,
    ids: &[String],
    format: ResponseFormat,
) -> ToolResult<String> {
    let feed = ctx.client.fetch_by_ids(ids).await.map_err(ToolError::from)?;

    let papers: &[Paper] = &feed.papers;
    let missing = ids
        .iter()
        .filter(|id| !papers.iter().any(|p| p.matches_id(id)))
        .collect::<Vec<_>>();

    if !missing.is_empty() {
        tracing::info!(requested = ids.len(), missing = ?missing, "Some arXiv IDs were not found");
    }

    match format {
        ResponseFormat::Markdown => Ok(formatters::format_details_markdown(papers)),
        ResponseFormat::Json => {
            let compact = papers.iter().map(formatters::compact_paper).collect::<Vec<_>>();
            Ok(serde_json::to_string_pretty(&json!({
                "requested": ids,
                "missing": missing,
                "count": compact.len(),
                "papers": compact
            }))?)
        }
    }
}

/// Full details for one paper.
pub struct GetPaperByIdTool;

#[async_trait::async_trait]
impl McpTool for GetPaperByIdTool {
    fn name(&self) -> &'static str {
        "get_paper_by_id"
    }

    fn description(&self) -> &'static str {
        "Retrieves full details for a single paper using its arXiv ID \
         (e.g., '2307.09288', 'hep-th/9901001', or an arxiv.org URL)."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "arxiv_id": {
                    "type": "string",
                    "description": "arXiv ID, optionally versioned (e.g., '1706.03762v7')"
                },
                "response_format": response_format_schema()
            },
            "required": ["arxiv_id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PaperByIdInput = serde_json::from_value(input)?;
        let id = params.validate()?;

        fetch_and_render(ctx, &[id], params.response_format).await
    }
}

/// Full details for several papers in one request.
pub struct GetPapersByIdsTool;

#[async_trait::async_trait]
impl McpTool for GetPapersByIdsTool {
    fn name(&self) -> &'static str {
        "get_papers_by_ids"
    }

    fn description(&self) -> &'static str {
        "Retrieves full details for a list of papers using their arXiv IDs \
         (e.g., ['2307.09288', '1706.03762']). Unknown IDs are omitted from the result."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "arxiv_ids": {
                    "type": "array",
                    "items": {"type": "string"},
                    "minItems": 1,
                    "maxItems": limits::MAX_IDS,
                    "description": "arXiv IDs to fetch"
                },
                "response_format": response_format_schema()
            },
            "required": ["arxiv_ids"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PapersByIdsInput = serde_json::from_value(input)?;
        let ids = params.validate()?;

        fetch_and_render(ctx, &ids, params.response_format).await
    }
}
