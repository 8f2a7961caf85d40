//! arXiv identifier and category code validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ToolError, ToolResult};

/// `2307.09288`, `0704.0001v2`.
static NEW_STYLE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}\.\d{4,5}(?:v\d+)?$").expect("valid new-style id regex")
});

/// `hep-th/9901001`, `math.GT/0309136v1`.
static OLD_STYLE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]+(?:-[a-z]+)?(?:\.[A-Z]{2})?/\d{7}(?:v\d+)?$")
        .expect("valid old-style id regex")
});

/// Prefixes users paste in front of bare identifiers.
static ID_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:arxiv:|(?:https?://)?(?:www\.|export\.)?arxiv\.org/(?:abs|pdf)/)")
        .expect("valid id prefix regex")
});

/// `cs.LG`, `hep-th`, `astro-ph.CO`, `cond-mat.mes-hall`.
static CATEGORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]+(?:-[a-z]+)?(?:\.[A-Za-z]+(?:-[A-Za-z]+)?)?$")
        .expect("valid category regex")
});

/// Check whether `id` is a bare arXiv identifier (either scheme).
#[must_use]
pub fn is_valid_arxiv_id(id: &str) -> bool {
    NEW_STYLE_ID.is_match(id) || OLD_STYLE_ID.is_match(id)
}

/// Normalize user input to a bare arXiv identifier.
///
/// Accepts `arXiv:` prefixes, abstract/PDF URLs and a trailing `.pdf`.
pub fn normalize_arxiv_id(field: &str, raw: &str) -> ToolResult<String> {
    let trimmed = raw.trim();
    let stripped = ID_PREFIX.replace(trimmed, "");
    let id = stripped.trim_end_matches('/');
    let id = id.strip_suffix(".pdf").unwrap_or(id);

    if id.is_empty() {
        return Err(ToolError::validation(field, "arXiv ID cannot be empty"));
    }

    if !is_valid_arxiv_id(id) {
        return Err(ToolError::validation(
            field,
            format!("'{trimmed}' is not a valid arXiv ID (expected e.g. 2307.09288 or hep-th/9901001)"),
        ));
    }

    Ok(id.to_string())
}

/// Validate an arXiv category code such as `cs.LG`.
pub fn validate_category(field: &str, raw: &str) -> ToolResult<String> {
    let category = raw.trim();

    if category.is_empty() {
        return Err(ToolError::validation(field, "category cannot be empty"));
    }

    if !CATEGORY.is_match(category) {
        return Err(ToolError::validation(
            field,
            format!("'{category}' is not a valid arXiv category (expected e.g. cs.LG or astro-ph.CO)"),
        ));
    }

    Ok(category.to_string())
}
