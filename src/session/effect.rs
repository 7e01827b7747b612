//! Effects produced by state transitions

use crate::entry::TranscriptEntry;
use serde::Serialize;

/// Effects to be executed after a state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Append an entry to the end of the log
    AppendEntry(TranscriptEntry),

    /// Attach an answer to the entry at `index`
    ResolveEntry { index: usize, answer: String },

    /// Ask the answer service; exactly one per accepted submission
    RequestAnswer { question: String },

    /// Tell subscribers something changed
    Notify(SessionUpdate),
}

/// Change notifications for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionUpdate {
    EntryAppended { index: usize },
    EntryResolved { index: usize },
    /// The answer service failed; the entry stays without an answer
    RequestFailed { index: usize, message: String },
    BusyChanged { busy: bool },
    HistoryLoaded { count: usize },
}

impl Effect {
    pub fn append(entry: TranscriptEntry) -> Self {
        Effect::AppendEntry(entry)
    }

    pub fn notify_busy(busy: bool) -> Self {
        Effect::Notify(SessionUpdate::BusyChanged { busy })
    }

    pub fn notify_appended(index: usize) -> Self {
        Effect::Notify(SessionUpdate::EntryAppended { index })
    }

    pub fn notify_resolved(index: usize) -> Self {
        Effect::Notify(SessionUpdate::EntryResolved { index })
    }
}
