//! JSON output formatting.

use serde_json::{Value, json};

use crate::models::{Feed, Paper};

/// Create a compact paper representation for JSON output.
///
/// Optional extension fields are only emitted when present.
#[must_use]
pub fn compact_paper(paper: &Paper) -> Value {
    let mut obj = json!({
        "id": paper.id,
        "title": paper.title,
        "authors": paper.authors,
        "summary": paper.summary,
        "categories": paper.categories,
        "primary_category": paper.primary_category,
        "published": paper.published.map(|d| d.to_rfc3339()),
        "abs_url": paper.abs_url,
        "pdf_url": paper.pdf_url,
    });

    if let Some(updated) = paper.updated {
        obj["updated"] = json!(updated.to_rfc3339());
    }

    if let Some(doi) = &paper.doi {
        obj["doi"] = json!(doi);
    }

    if let Some(journal_ref) = &paper.journal_ref {
        obj["journal_ref"] = json!(journal_ref);
    }

    if let Some(comment) = &paper.comment {
        obj["comment"] = json!(comment);
    }

    obj
}

/// Wrap a feed page with its paging counters.
#[must_use]
pub fn format_feed_json(feed: &Feed) -> Value {
    json!({
        "total_results": feed.total_results,
        "start_index": feed.start_index,
        "count": feed.papers.len(),
        "has_more": feed.has_more(),
        "papers": feed.papers.iter().map(compact_paper).collect::<Vec<_>>(),
    })
}
