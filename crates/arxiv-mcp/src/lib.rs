//! arXiv MCP Server
//!
//! A Model Context Protocol (MCP) server for the arXiv API.
//! Lets LLM agents search preprints by topic, author or category and fetch
//! paper metadata by arXiv identifier.
//!
//! # Features
//!
//! - **5 MCP Tools**: `search_papers`, `find_papers_by_author`,
//!   `get_latest_from_category`, `get_paper_by_id`, `get_papers_by_ids`
//! - **Async-first**: Built on Tokio, one HTTP round trip per tool call
//! - **Atom parsing**: arXiv feeds become plain [`models::Paper`] records
//! - **Two transports**: stdio and streamable HTTP
//!
//! # Example
//!
//! ```no_run
//! use arxiv_mcp::{client::{ArxivClient, SearchQuery}, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ArxivClient::new(Config::from_env()?)?;
//!
//!     let feed = client.search(&SearchQuery::category("cs.LG")).await?;
//!     for paper in &feed.papers {
//!         println!("{} {}", paper.id, paper.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod server;
pub mod tools;

pub use client::ArxivClient;
pub use config::Config;
pub use error::{ClientError, ToolError};
