//! Transcript entries and their raw text form
//!
//! A finalized exchange travels as `"Query: <query>\nResponse: <answer>"`.
//! That string shape is only used at the history boundary and by
//! [`crate::transcript::format`]; everywhere else entries are typed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label that prefixes the question in the raw form
pub const QUERY_LABEL: &str = "Query: ";

/// Separator between question and answer in the raw form
pub const RESPONSE_SEPARATOR: &str = "\nResponse: ";

/// Split a raw record into `(query, answer)`.
///
/// Returns `None` unless the separator occurs exactly once. A leading
/// [`QUERY_LABEL`] is stripped from the query.
pub fn split_exchange(raw: &str) -> Option<(&str, &str)> {
    let (query, answer) = raw.split_once(RESPONSE_SEPARATOR)?;
    if answer.contains(RESPONSE_SEPARATOR) {
        return None;
    }
    Some((query.strip_prefix(QUERY_LABEL).unwrap_or(query), answer))
}

/// Where an entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Typed in this session, not yet confirmed by the answer service
    Local,
    /// Loaded from history or confirmed by the answer service
    Remote,
}

/// Body of an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntryContent {
    /// A question and, once resolved, its answer
    Exchange {
        query: String,
        answer: Option<String>,
    },
    /// History record without a usable separator, kept as-is
    Verbatim { text: String },
}

/// One exchange in the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub content: EntryContent,
    pub origin: Origin,
    pub created_at: DateTime<Utc>,
}

impl TranscriptEntry {
    /// A freshly submitted, unresolved question
    pub fn local(query: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            content: EntryContent::Exchange {
                query: query.into(),
                answer: None,
            },
            origin: Origin::Local,
            created_at,
        }
    }

    /// A resolved entry rebuilt from a history record
    pub fn from_record(raw: &str, created_at: DateTime<Utc>) -> Self {
        let content = match split_exchange(raw) {
            Some((query, answer)) => EntryContent::Exchange {
                query: query.to_string(),
                answer: Some(answer.to_string()),
            },
            None => EntryContent::Verbatim {
                text: raw.to_string(),
            },
        };
        Self {
            content,
            origin: Origin::Remote,
            created_at,
        }
    }

    pub fn query(&self) -> Option<&str> {
        match &self.content {
            EntryContent::Exchange { query, .. } => Some(query),
            EntryContent::Verbatim { .. } => None,
        }
    }

    pub fn answer(&self) -> Option<&str> {
        match &self.content {
            EntryContent::Exchange { answer, .. } => answer.as_deref(),
            EntryContent::Verbatim { .. } => None,
        }
    }

    /// Verbatim records count as resolved; they never wait on an answer.
    pub fn is_resolved(&self) -> bool {
        match &self.content {
            EntryContent::Exchange { answer, .. } => answer.is_some(),
            EntryContent::Verbatim { .. } => true,
        }
    }

    /// Attach the answer and promote the entry to [`Origin::Remote`].
    ///
    /// Returns `false` and leaves the entry untouched if it is already
    /// resolved.
    pub fn resolve(&mut self, text: String) -> bool {
        match &mut self.content {
            EntryContent::Exchange { answer, .. } if answer.is_none() => {
                *answer = Some(text);
                self.origin = Origin::Remote;
                true
            }
            _ => false,
        }
    }

    /// Raw text form. Pending exchanges have no response part.
    pub fn to_raw(&self) -> String {
        match &self.content {
            EntryContent::Exchange {
                query,
                answer: Some(answer),
            } => format!("{QUERY_LABEL}{query}{RESPONSE_SEPARATOR}{answer}"),
            EntryContent::Exchange {
                query,
                answer: None,
            } => format!("{QUERY_LABEL}{query}"),
            EntryContent::Verbatim { text } => text.clone(),
        }
    }
}
