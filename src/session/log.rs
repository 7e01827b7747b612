//! Append-only message log

use crate::entry::TranscriptEntry;
use serde::Serialize;

/// Ordered entries of one session. Entries are never removed or reordered,
/// so an index stays valid for the life of the session.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TranscriptLog {
    entries: Vec<TranscriptEntry>,
}

impl TranscriptLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TranscriptEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter()
    }

    /// Append and return the new entry's index
    pub(crate) fn push(&mut self, entry: TranscriptEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Attach an answer in place. `false` if the index is unknown or the
    /// entry is already resolved.
    pub(crate) fn resolve(&mut self, index: usize, answer: String) -> bool {
        self.entries
            .get_mut(index)
            .is_some_and(|entry| entry.resolve(answer))
    }
}

impl<'a> IntoIterator for &'a TranscriptLog {
    type Item = &'a TranscriptEntry;
    type IntoIter = std::slice::Iter<'a, TranscriptEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
