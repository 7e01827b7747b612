//! Render-ready snapshots for the presentation layer

use crate::entry::{Origin, TranscriptEntry};
use crate::session::{SessionState, TranscriptLog};
use crate::transcript::{format_entry, RenderSegment};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One log entry with its formatted segments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEntry {
    pub index: usize,
    pub origin: Origin,
    pub created_at: DateTime<Utc>,
    /// Whether this is the question currently in flight
    pub pending: bool,
    pub segments: Vec<RenderSegment>,
}

impl RenderedEntry {
    pub fn new(index: usize, entry: &TranscriptEntry, pending: bool) -> Self {
        Self {
            index,
            origin: entry.origin,
            created_at: entry.created_at,
            pending,
            segments: format_entry(entry),
        }
    }
}

/// The whole transcript plus the pending indicator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptView {
    pub entries: Vec<RenderedEntry>,
    pub busy: bool,
}

impl TranscriptView {
    pub fn build(log: &TranscriptLog, state: SessionState) -> Self {
        let pending = state.pending_index();
        let entries = log
            .iter()
            .enumerate()
            .map(|(index, entry)| RenderedEntry::new(index, entry, pending == Some(index)))
            .collect();
        Self {
            entries,
            busy: state.is_busy(),
        }
    }

    /// Nothing to show and nothing in flight, so a welcome message fits
    pub fn is_blank(&self) -> bool {
        self.entries.is_empty() && !self.busy
    }
}
