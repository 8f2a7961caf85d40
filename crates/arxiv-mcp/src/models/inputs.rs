//! Input models for MCP tool parameters.
//!
//! Field names are snake_case to match the tool schemas advertised in `tools/list`.

use serde::{Deserialize, Serialize};

use super::ids::{normalize_arxiv_id, validate_category};
use super::{ResponseFormat, SortBy, SortOrder};
use crate::config::limits;
use crate::error::{ToolError, ToolResult};

/// Input for the general-purpose search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPapersInput {
    /// Query in arXiv syntax (e.g., `ti:"quantum computing" AND au:"John Preskill"`).
    pub query: String,

    /// Maximum papers to return.
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// Offset into the result list.
    #[serde(default)]
    pub start: u32,

    /// Sort key.
    #[serde(default)]
    pub sort_by: SortBy,

    /// Sort direction.
    #[serde(default)]
    pub sort_order: SortOrder,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl SearchPapersInput {
    /// Validate and return the trimmed query.
    pub fn validate(&self) -> ToolResult<String> {
        validate_max_results(self.max_results)?;
        require_text("query", &self.query)
    }
}

fn default_max_results() -> u32 {
    limits::DEFAULT_MAX_RESULTS
}

/// Input for author search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorPapersInput {
    /// Full author name (e.g., "Geoffrey Hinton").
    pub author_name: String,

    /// Maximum papers to return.
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// Offset into the result list.
    #[serde(default)]
    pub start: u32,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl AuthorPapersInput {
    /// Validate and return the cleaned author name.
    ///
    /// Double quotes are dropped so the name can sit inside an `au:"..."` phrase.
    pub fn validate(&self) -> ToolResult<String> {
        validate_max_results(self.max_results)?;
        let name = self.author_name.replace('"', " ");
        let name = name.split_whitespace().collect::<Vec<_>>().join(" ");
        require_text("author_name", &name)
    }
}

/// Input for latest papers in a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryLatestInput {
    /// Category code (e.g., "cs.LG", "astro-ph.CO").
    pub category: String,

    /// Maximum papers to return.
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// Offset into the result list.
    #[serde(default)]
    pub start: u32,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl CategoryLatestInput {
    /// Validate and return the category code.
    pub fn validate(&self) -> ToolResult<String> {
        validate_max_results(self.max_results)?;
        validate_category("category", &self.category)
    }
}

/// Input for a single paper lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperByIdInput {
    /// arXiv ID (e.g., "2307.09288").
    pub arxiv_id: String,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl PaperByIdInput {
    /// Validate and return the normalized identifier.
    pub fn validate(&self) -> ToolResult<String> {
        normalize_arxiv_id("arxiv_id", &self.arxiv_id)
    }
}

/// Input for a batch paper lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PapersByIdsInput {
    /// arXiv IDs (e.g., ["2307.09288", "1706.03762"]).
    pub arxiv_ids: Vec<String>,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl PapersByIdsInput {
    /// Validate, normalize and deduplicate the identifiers, keeping first occurrences.
    pub fn validate(&self) -> ToolResult<Vec<String>> {
        if self.arxiv_ids.is_empty() {
            return Err(ToolError::validation("arxiv_ids", "at least one arXiv ID is required"));
        }

        if self.arxiv_ids.len() > limits::MAX_IDS {
            return Err(ToolError::validation(
                "arxiv_ids",
                format!("at most {} IDs per call, got {}", limits::MAX_IDS, self.arxiv_ids.len()),
            ));
        }

        let mut ids: Vec<String> = Vec::with_capacity(self.arxiv_ids.len());
        for (i, raw) in self.arxiv_ids.iter().enumerate() {
            let id = normalize_arxiv_id(&format!("arxiv_ids[{i}]"), raw)?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        Ok(ids)
    }
}

fn validate_max_results(max_results: u32) -> ToolResult<()> {
    if max_results == 0 || max_results > limits::MAX_RESULTS_LIMIT {
        return Err(ToolError::validation(
            "max_results",
            format!("must be between 1 and {}, got {max_results}", limits::MAX_RESULTS_LIMIT),
        ));
    }
    Ok(())
}

fn require_text(field: &str, value: &str) -> ToolResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ToolError::validation(field, "cannot be empty"));
    }
    Ok(trimmed.to_string())
}
