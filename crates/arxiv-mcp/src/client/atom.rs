//! Atom feed parsing.
//!
//! Walks the XML event stream once and builds [`Paper`] records from
//! `<entry>` elements. Element names are matched on their local part, so
//! `arxiv:primary_category` and `opensearch:totalResults` need no
//! namespace bookkeeping.

use chrono::{DateTime, Utc};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{ClientError, ClientResult};
use crate::models::{Feed, Paper};

/// arXiv reports query errors as an entry whose id lives under this URL.
const ERROR_ID_PREFIX: &str = "http://arxiv.org/api/errors";

/// Parse an arXiv Atom response into a [`Feed`].
///
/// # Errors
///
/// - [`ClientError::Xml`] when the body is not well-formed XML.
/// - [`ClientError::MalformedFeed`] when the root element is not `<feed>`.
/// - [`ClientError::BadRequest`] when arXiv returned an error entry.
pub fn parse_feed(xml: &str) -> ClientResult<Feed> {
    let mut reader = Reader::from_str(xml);

    let mut feed = Feed::default();
    let mut saw_root = false;
    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut text = String::new();
    let mut entry: Option<EntryBuilder> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                if path.is_empty() {
                    expect_root(&name)?;
                    saw_root = true;
                }
                if name == b"entry" {
                    entry = Some(EntryBuilder::default());
                }
                if let Some(builder) = entry.as_mut() {
                    builder.read_attributes(&name, &e)?;
                }
                // Markup nested inside a text field keeps accumulating into it.
                if path.last().is_none_or(|parent| is_container(parent)) {
                    text.clear();
                }
                path.push(name);
            }
            Event::Empty(e) => {
                let name = e.local_name().as_ref().to_vec();
                if path.is_empty() {
                    expect_root(&name)?;
                    saw_root = true;
                }
                if let Some(builder) = entry.as_mut() {
                    builder.read_attributes(&name, &e)?;
                }
            }
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c.into_inner())),
            Event::End(_) => {
                let Some(name) = path.pop() else {
                    return Err(ClientError::malformed("unbalanced closing tag"));
                };
                let parent = path.last().map(Vec::as_slice);
                if parent.is_some_and(|parent| !is_container(parent)) {
                    continue;
                }
                let value = std::mem::take(&mut text);

                match (parent, name.as_slice()) {
                    (Some(b"feed"), b"entry") => {
                        if let Some(paper) = entry.take().map(EntryBuilder::finish).transpose()?.flatten() {
                            feed.papers.push(paper);
                        }
                    }
                    (Some(b"feed"), b"totalResults") => feed.total_results = parse_count(&value),
                    (Some(b"feed"), b"startIndex") => feed.start_index = parse_count(&value),
                    (Some(b"feed"), b"itemsPerPage") => feed.items_per_page = parse_count(&value),
                    (Some(b"entry"), field) => {
                        if let Some(builder) = entry.as_mut() {
                            builder.set_field(field, value);
                        }
                    }
                    (Some(b"author"), b"name") => {
                        if let Some(builder) = entry.as_mut() {
                            builder.push_author(&value);
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(ClientError::malformed("response contains no <feed> element"));
    }

    tracing::debug!(
        total = feed.total_results,
        start = feed.start_index,
        count = feed.papers.len(),
        "Parsed arXiv feed"
    );

    Ok(feed)
}

/// Elements whose children are fields rather than text.
fn is_container(name: &[u8]) -> bool {
    matches!(name, b"feed" | b"entry" | b"author")
}

fn expect_root(name: &[u8]) -> ClientResult<()> {
    if name == b"feed" {
        Ok(())
    } else {
        Err(ClientError::malformed(format!(
            "expected <feed> root element, found <{}>",
            String::from_utf8_lossy(name)
        )))
    }
}

fn parse_count(value: &str) -> u64 {
    value.trim().parse().unwrap_or(0)
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value?.trim();
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            tracing::debug!(value, error = %e, "Unparseable feed timestamp");
            None
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let value = collapse_whitespace(&value);
    if value.is_empty() { None } else { Some(value) }
}

fn attribute(e: &BytesStart<'_>, key: &[u8]) -> ClientResult<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.local_name().as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Accumulates one `<entry>` until its closing tag.
#[derive(Debug, Default)]
struct EntryBuilder {
    id: String,
    title: String,
    summary: String,
    authors: Vec<String>,
    categories: Vec<String>,
    primary_category: Option<String>,
    published: Option<String>,
    updated: Option<String>,
    abs_url: Option<String>,
    pdf_url: Option<String>,
    doi: Option<String>,
    journal_ref: Option<String>,
    comment: Option<String>,
}

impl EntryBuilder {
    fn read_attributes(&mut self, name: &[u8], e: &BytesStart<'_>) -> ClientResult<()> {
        match name {
            b"link" => {
                let Some(href) = attribute(e, b"href")? else {
                    return Ok(());
                };
                let rel = attribute(e, b"rel")?.unwrap_or_default();
                let kind = attribute(e, b"type")?.unwrap_or_default();
                let title = attribute(e, b"title")?.unwrap_or_default();

                if rel == "alternate" {
                    self.abs_url.get_or_insert(href);
                } else if kind == "application/pdf" || title == "pdf" {
                    self.pdf_url.get_or_insert(href);
                }
            }
            b"category" => {
                if let Some(term) = attribute(e, b"term")? {
                    if !term.is_empty() && !self.categories.contains(&term) {
                        self.categories.push(term);
                    }
                }
            }
            b"primary_category" => {
                if let Some(term) = attribute(e, b"term")? {
                    self.primary_category = Some(term);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn set_field(&mut self, field: &[u8], value: String) {
        match field {
            b"id" => self.id = value.trim().to_string(),
            b"title" => self.title = collapse_whitespace(&value),
            b"summary" => self.summary = collapse_whitespace(&value),
            b"published" => self.published = Some(value),
            b"updated" => self.updated = Some(value),
            b"doi" => self.doi = non_empty(value),
            b"journal_ref" => self.journal_ref = non_empty(value),
            b"comment" => self.comment = non_empty(value),
            _ => {}
        }
    }

    fn push_author(&mut self, name: &str) {
        let name = collapse_whitespace(name);
        if !name.is_empty() {
            self.authors.push(name);
        }
    }

    /// Turn the entry into a paper, `None` for placeholder entries.
    fn finish(self) -> ClientResult<Option<Paper>> {
        if self.id.starts_with(ERROR_ID_PREFIX) {
            let message = if self.summary.is_empty() { self.title } else { self.summary };
            return Err(ClientError::bad_request(message));
        }

        let id = self
            .id
            .split_once("/abs/")
            .map_or(self.id.as_str(), |(_, id)| id)
            .trim_matches('/')
            .to_string();

        if id.is_empty() {
            tracing::warn!(title = %self.title, "Skipping feed entry without an identifier");
            return Ok(None);
        }

        if self.title.is_empty() && self.summary.is_empty() {
            tracing::warn!(id = %id, "Skipping empty feed entry");
            return Ok(None);
        }

        let mut categories = self.categories;
        if let Some(primary) = &self.primary_category {
            if !categories.contains(primary) {
                categories.insert(0, primary.clone());
            }
        }

        let published = parse_timestamp(self.published.as_deref());
        let updated = parse_timestamp(self.updated.as_deref());
        let abs_url = self.abs_url.unwrap_or(self.id);

        Ok(Some(Paper {
            id,
            title: self.title,
            authors: self.authors,
            summary: self.summary,
            categories,
            primary_category: self.primary_category,
            published: published.or(updated),
            updated,
            abs_url,
            pdf_url: self.pdf_url,
            doi: self.doi,
            journal_ref: self.journal_ref,
            comment: self.comment,
        }))
    }
}
