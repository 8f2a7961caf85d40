//! Markdown output formatting.

use std::borrow::Cow;

use crate::config::limits;
use crate::models::{Feed, Paper};

/// Message for a search that matched nothing.
pub const NO_SEARCH_RESULTS: &str = "No papers found for your query.";

/// Message for an identifier lookup that matched nothing.
pub const NO_ID_RESULTS: &str = "Could not find any papers with the provided IDs.";

const SEPARATOR: &str = "\n\n---\n\n";

/// Format a page of search results with abstracts shortened.
#[must_use]
pub fn format_search_markdown(feed: &Feed) -> String {
    if feed.is_empty() {
        return NO_SEARCH_RESULTS.to_string();
    }

    let count = feed.papers.len();
    let mut output = format!("Found {count} papers");
    if feed.total_results > count as u64 {
        let first = feed.start_index + 1;
        let last = feed.start_index + count as u64;
        output.push_str(&format!(
            " (showing {first}-{last} of {})",
            feed.total_results
        ));
    }
    output.push_str(":\n\n");

    let entries = feed
        .papers
        .iter()
        .enumerate()
        .map(|(i, paper)| format_paper_summary(paper, i + 1))
        .collect::<Vec<_>>();
    output.push_str(&entries.join(SEPARATOR));

    output
}

/// Format one search hit.
#[must_use]
pub fn format_paper_summary(paper: &Paper, index: usize) -> String {
    let mut output = format!("## {index}. {}\n\n", paper.title);

    if !paper.authors.is_empty() {
        output.push_str(&format!("**Authors**: {}\n", paper.author_names()));
    }

    output.push_str(&format!(
        "**Published**: {} | **Primary Category**: {} | **arXiv**: {}\n",
        paper.published_date(),
        paper.primary_category_or_default(),
        paper.id
    ));

    output.push_str(&format!("**Abstract Link**: {}\n", paper.abs_url));
    output.push_str(&format!("**PDF Link**: {}\n\n", paper.pdf_url_or_default()));

    output.push_str(&format!(
        "**Abstract**: {}",
        truncate_chars(&paper.summary, limits::ABSTRACT_PREVIEW_CHARS)
    ));

    output
}

/// Format full details for papers fetched by identifier.
#[must_use]
pub fn format_details_markdown(papers: &[Paper]) -> String {
    if papers.is_empty() {
        return NO_ID_RESULTS.to_string();
    }

    papers
        .iter()
        .map(format_paper_details)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Format one paper with every field the feed provided.
#[must_use]
pub fn format_paper_details(paper: &Paper) -> String {
    let mut output = format!("## {}\n\n", paper.title);

    output.push_str(&format!("**arXiv ID**: {}\n", paper.id));
    output.push_str(&format!("**Authors**: {}\n", paper.author_names()));
    output.push_str(&format!("**Published Date**: {}\n", paper.published_date()));

    if let (Some(updated), Some(published)) = (paper.updated, paper.published) {
        if updated.date_naive() != published.date_naive() {
            output.push_str(&format!("**Updated**: {}\n", updated.format("%Y-%m-%d")));
        }
    }

    output.push_str(&format!(
        "**Primary Category**: {}\n",
        paper.primary_category_or_default()
    ));

    if !paper.categories.is_empty() {
        output.push_str(&format!("**Categories**: {}\n", paper.categories.join(", ")));
    }

    output.push_str(&format!("**Abstract Link**: {}\n", paper.abs_url));
    output.push_str(&format!("**PDF Link**: {}\n", paper.pdf_url_or_default()));

    if let Some(doi) = &paper.doi {
        output.push_str(&format!("**DOI**: [{doi}](https://doi.org/{doi})\n"));
    }
    if let Some(journal_ref) = &paper.journal_ref {
        output.push_str(&format!("**Journal Reference**: {journal_ref}\n"));
    }
    if let Some(comment) = &paper.comment {
        output.push_str(&format!("**Comment**: {comment}\n"));
    }

    output.push_str(&format!("\n### Abstract\n\n{}", paper.summary));

    output
}

/// Cut `text` to `max` characters, marking the cut with `...`.
fn truncate_chars(text: &str, max: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => Cow::Owned(format!("{}...", &text[..byte_idx])),
        None => Cow::Borrowed(text),
    }
}
