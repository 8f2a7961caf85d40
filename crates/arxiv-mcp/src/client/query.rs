//! arXiv query-string construction.

use crate::config::limits;
use crate::models::{SortBy, SortOrder};

/// A `search_query` request against the arXiv API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    search_query: String,
    start: u32,
    max_results: u32,
    sort_by: SortBy,
    sort_order: SortOrder,
}

impl SearchQuery {
    /// Query in raw arXiv syntax, newest submissions first.
    #[must_use]
    pub fn new(search_query: impl Into<String>) -> Self {
        Self {
            search_query: search_query.into(),
            start: 0,
            max_results: limits::DEFAULT_MAX_RESULTS,
            sort_by: SortBy::SubmittedDate,
            sort_order: SortOrder::Descending,
        }
    }

    /// Papers by an author, as an exact-phrase `au:` query.
    #[must_use]
    pub fn author(name: &str) -> Self {
        Self::new(format!("au:\"{name}\""))
    }

    /// Papers in a category.
    #[must_use]
    pub fn category(category: &str) -> Self {
        Self::new(format!("cat:{category}"))
    }

    /// Set the result window.
    #[must_use]
    pub const fn page(mut self, start: u32, max_results: u32) -> Self {
        self.start = start;
        self.max_results = max_results;
        self
    }

    /// Set the ordering.
    #[must_use]
    pub const fn sorted(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    /// The `search_query` value.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Query parameters in the order arXiv documents them.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        vec![
            ("search_query".to_string(), self.search_query.clone()),
            ("start".to_string(), self.start.to_string()),
            ("max_results".to_string(), self.max_results.to_string()),
            ("sortBy".to_string(), self.sort_by.as_param().to_string()),
            ("sortOrder".to_string(), self.sort_order.as_param().to_string()),
        ]
    }
}

/// Parameters for an `id_list` lookup sized to return every requested paper.
#[must_use]
pub fn id_list_params(ids: &[String]) -> Vec<(String, String)> {
    vec![
        ("id_list".to_string(), ids.join(",")),
        ("max_results".to_string(), ids.len().to_string()),
    ]
}
