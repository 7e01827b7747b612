//! Transcript formatting engine
//!
//! Turns a raw `"Query: ...\nResponse: ..."` string, or a typed
//! [`TranscriptEntry`], into a flat list of [`RenderSegment`]s. Stateless and
//! infallible: text that does not fit the expected shape comes back as plain
//! text instead of an error.

mod lexer;
mod scanner;
mod segment;

#[cfg(test)]
mod proptests;

pub use segment::RenderSegment;

use crate::entry::{split_exchange, EntryContent, TranscriptEntry};

/// Format one raw transcript string.
///
/// If `raw` holds the response separator exactly once, the question becomes a
/// [`RenderSegment::QueryLabel`] and the body is scanned for markup.
/// Otherwise the whole string is returned as a single plain segment.
pub fn format(raw: &str) -> Vec<RenderSegment> {
    match split_exchange(raw) {
        Some((query, body)) => exchange(query, Some(body)),
        None => vec![RenderSegment::Plain(raw.to_string())],
    }
}

/// Format a typed entry. A pending exchange renders as its question alone.
pub fn format_entry(entry: &TranscriptEntry) -> Vec<RenderSegment> {
    match &entry.content {
        EntryContent::Exchange { query, answer } => exchange(query, answer.as_deref()),
        EntryContent::Verbatim { text } => vec![RenderSegment::Plain(text.clone())],
    }
}

fn exchange(query: &str, body: Option<&str>) -> Vec<RenderSegment> {
    let mut segments = vec![RenderSegment::QueryLabel(query.to_string())];
    if let Some(body) = body {
        segments.extend(scanner::scan(body));
    }
    segments
}
