//! Paper and feed models built from arXiv Atom responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A paper record from the arXiv API.
///
/// Built once per feed entry and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// arXiv identifier, possibly versioned (`2307.09288v2`).
    pub id: String,

    /// Paper title with whitespace collapsed.
    pub title: String,

    /// Author names in feed order.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Abstract with whitespace collapsed.
    #[serde(default)]
    pub summary: String,

    /// Category terms, primary first when the feed lists it first.
    #[serde(default)]
    pub categories: Vec<String>,

    /// Primary category term (e.g., "cs.LG").
    #[serde(default)]
    pub primary_category: Option<String>,

    /// First submission time.
    #[serde(default)]
    pub published: Option<DateTime<Utc>>,

    /// Time of the latest version.
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,

    /// Abstract page URL.
    pub abs_url: String,

    /// PDF URL.
    #[serde(default)]
    pub pdf_url: Option<String>,

    /// DOI of the published version.
    #[serde(default)]
    pub doi: Option<String>,

    /// Journal reference of the published version.
    #[serde(default)]
    pub journal_ref: Option<String>,

    /// Author comment (page counts, venue notes).
    #[serde(default)]
    pub comment: Option<String>,
}

impl Paper {
    /// Identifier without the version suffix.
    #[must_use]
    pub fn base_id(&self) -> &str {
        strip_version(&self.id)
    }

    /// True when `id` names this paper, with or without a version suffix.
    #[must_use]
    pub fn matches_id(&self, id: &str) -> bool {
        self.id == id || self.base_id() == id
    }

    /// Author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.join(", ")
    }

    /// Submission date as `YYYY-MM-DD`, falling back to the update date.
    #[must_use]
    pub fn published_date(&self) -> String {
        self.published
            .or(self.updated)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Primary category, or "N/A".
    #[must_use]
    pub fn primary_category_or_default(&self) -> &str {
        self.primary_category.as_deref().unwrap_or("N/A")
    }

    /// PDF link, or "N/A".
    #[must_use]
    pub fn pdf_url_or_default(&self) -> &str {
        self.pdf_url.as_deref().unwrap_or("N/A")
    }
}

/// `2307.09288v2` -> `2307.09288`.
fn strip_version(id: &str) -> &str {
    if let Some(pos) = id.rfind('v') {
        let (base, rest) = id.split_at(pos);
        let digits = &rest[1..];
        if !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && base.ends_with(|c: char| c.is_ascii_digit())
        {
            return base;
        }
    }
    id
}

/// A parsed page of results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    /// Total number of matches reported by arXiv.
    #[serde(default)]
    pub total_results: u64,

    /// Offset of the first returned entry.
    #[serde(default)]
    pub start_index: u64,

    /// Page size arXiv applied.
    #[serde(default)]
    pub items_per_page: u64,

    /// Papers in this page.
    #[serde(default)]
    pub papers: Vec<Paper>,
}

impl Feed {
    /// Check if arXiv has matches beyond this page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.start_index + (self.papers.len() as u64) < self.total_results
    }

    /// Check whether the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }
}
