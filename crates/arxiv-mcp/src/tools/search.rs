//! Search tools: search_papers, find_papers_by_author, get_latest_from_category.

use serde_json::json;

use super::{McpTool, ToolContext, render_search, response_format_schema};
use crate::client::SearchQuery;
use crate::config::limits;
use crate::error::{ToolError, ToolResult};
use crate::models::{
    AuthorPapersInput, CategoryLatestInput, SearchPapersInput, SortBy, SortOrder,
};

fn max_results_schema() -> serde_json::Value {
    json!({
        "type": "integer",
        "default": limits::DEFAULT_MAX_RESULTS,
        "minimum": 1,
        "maximum": limits::MAX_RESULTS_LIMIT,
        "description": "Maximum number of papers to return"
    })
}

fn start_schema() -> serde_json::Value {
    json!({
        "type": "integer",
        "default": 0,
        "minimum": 0,
        "description": "Offset into the result list, for paging"
    })
}

/// General-purpose arXiv search.
pub struct SearchPapersTool;

#[async_trait::async_trait]
impl McpTool for SearchPapersTool {
    fn name(&self) -> &'static str {
        "search_papers"
    }

    fn description(&self) -> &'static str {
        "General purpose search for arXiv papers. Best for complex queries using arXiv \
         syntax, e.g. 'ti:\"quantum computing\" AND au:\"John Preskill\"'. Field prefixes: \
         ti (title), au (author), abs (abstract), cat (category), all (all fields)."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query using arXiv syntax"
                },
                "max_results": max_results_schema(),
                "start": start_schema(),
                "sort_by": {
                    "type": "string",
                    "enum": ["relevance", "lastUpdatedDate", "submittedDate"],
                    "default": "submittedDate"
                },
                "sort_order": {
                    "type": "string",
                    "enum": ["ascending", "descending"],
                    "default": "descending"
                },
                "response_format": response_format_schema()
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SearchPapersInput = serde_json::from_value(input)?;
        let query = params.validate()?;

        let query = SearchQuery::new(query)
            .page(params.start, params.max_results)
            .sorted(params.sort_by, params.sort_order);

        let feed = ctx.client.search(&query).await.map_err(ToolError::from)?;

        tracing::debug!(count = feed.papers.len(), total = feed.total_results, "search_papers done");
        render_search(&feed, params.response_format)
    }
}

/// Recent papers by an author.
pub struct FindPapersByAuthorTool;

#[async_trait::async_trait]
impl McpTool for FindPapersByAuthorTool {
    fn name(&self) -> &'static str {
        "find_papers_by_author"
    }

    fn description(&self) -> &'static str {
        "Finds recent papers by a specific author's name, newest submissions first."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "author_name": {
                    "type": "string",
                    "description": "Full name of the author (e.g., 'Geoffrey Hinton')"
                },
                "max_results": max_results_schema(),
                "start": start_schema(),
                "response_format": response_format_schema()
            },
            "required": ["author_name"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: AuthorPapersInput = serde_json::from_value(input)?;
        let name = params.validate()?;

        let query = SearchQuery::author(&name)
            .page(params.start, params.max_results)
            .sorted(SortBy::SubmittedDate, SortOrder::Descending);

        let feed = ctx.client.search(&query).await.map_err(ToolError::from)?;

        render_search(&feed, params.response_format)
    }
}

/// Latest submissions in a category.
pub struct LatestFromCategoryTool;

#[async_trait::async_trait]
impl McpTool for LatestFromCategoryTool {
    fn name(&self) -> &'static str {
        "get_latest_from_category"
    }

    fn description(&self) -> &'static str {
        "Gets the most recently submitted papers from a specific arXiv category \
         (e.g., 'cs.LG', 'astro-ph.CO', 'hep-th')."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "category": {
                    "type": "string",
                    "description": "arXiv category code (e.g., 'cs.LG')"
                },
                "max_results": max_results_schema(),
                "start": start_schema(),
                "response_format": response_format_schema()
            },
            "required": ["category"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: CategoryLatestInput = serde_json::from_value(input)?;
        let category = params.validate()?;

        let query = SearchQuery::category(&category)
            .page(params.start, params.max_results)
            .sorted(SortBy::SubmittedDate, SortOrder::Descending);

        let feed = ctx.client.search(&query).await.map_err(ToolError::from)?;

        render_search(&feed, params.response_format)
    }
}
