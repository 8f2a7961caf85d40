//! Integration tests for the arXiv MCP server.
//!
//! These tests hit the real arXiv API.
//! Run with: `cargo test --features integration -- --nocapture --test-threads=1`

#![cfg(feature = "integration")]

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use arxiv_mcp::client::{ArxivClient, SearchQuery};
use arxiv_mcp::config::Config;
use arxiv_mcp::tools::{
    FindPapersByAuthorTool, GetPaperByIdTool, GetPapersByIdsTool, LatestFromCategoryTool,
    McpTool, SearchPapersTool, ToolContext,
};

/// Well-known paper IDs for testing.
mod paper_ids {
    /// "Attention Is All You Need" - Vaswani et al. 2017
    pub const ATTENTION: &str = "1706.03762";
    /// "Llama 2" - Touvron et al. 2023
    pub const LLAMA2: &str = "2307.09288";
    /// Maldacena's AdS/CFT paper (old-style identifier)
    pub const MALDACENA: &str = "hep-th/9711200";
}

fn create_context() -> ToolContext {
    let config = Config::from_env().expect("valid ARXIV_API_URL");
    ToolContext::new(Arc::new(ArxivClient::new(config).expect("Failed to create client")))
}

/// arXiv asks clients to leave a few seconds between calls.
async fn be_polite() {
    tokio::time::sleep(Duration::from_secs(3)).await;
}

#[tokio::test]
async fn test_live_search() {
    let ctx = create_context();

    let result = SearchPapersTool
        .execute(&ctx, json!({"query": "ti:\"attention is all you need\"", "max_results": 3}))
        .await
        .unwrap();

    println!("{result}");
    assert!(result.starts_with("Found"));
    be_polite().await;
}

#[tokio::test]
async fn test_live_author() {
    let ctx = create_context();

    let result = FindPapersByAuthorTool
        .execute(&ctx, json!({"author_name": "Geoffrey Hinton", "max_results": 2, "response_format": "json"}))
        .await
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
    assert!(parsed["total_results"].as_u64().unwrap() > 0);
    be_polite().await;
}

#[tokio::test]
async fn test_live_category() {
    let ctx = create_context();

    let result = LatestFromCategoryTool
        .execute(&ctx, json!({"category": "cs.LG", "max_results": 2}))
        .await
        .unwrap();

    assert!(result.contains("cs.LG") || result.contains("**Primary Category**"));
    be_polite().await;
}

#[tokio::test]
async fn test_live_paper_by_id() {
    let ctx = create_context();

    let result = GetPaperByIdTool
        .execute(&ctx, json!({"arxiv_id": paper_ids::ATTENTION}))
        .await
        .unwrap();

    assert!(result.contains("Attention Is All You Need"));
    be_polite().await;
}

#[tokio::test]
async fn test_live_papers_by_ids() {
    let ctx = create_context();

    let result = GetPapersByIdsTool
        .execute(
            &ctx,
            json!({
                "arxiv_ids": [paper_ids::LLAMA2, paper_ids::MALDACENA],
                "response_format": "json"
            }),
        )
        .await
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
    assert_eq!(parsed["count"], 2);
    be_polite().await;
}

#[tokio::test]
async fn test_live_client_paging() {
    let config = Config::from_env().unwrap();
    let client = ArxivClient::new(config).unwrap();

    let feed = client.search(&SearchQuery::category("hep-th").page(10, 5)).await.unwrap();

    assert_eq!(feed.start_index, 10);
    assert!(feed.papers.len() <= 5);
    assert!(feed.has_more());
    be_polite().await;
}
