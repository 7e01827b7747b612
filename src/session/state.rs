//! Session state

use serde::{Deserialize, Serialize};

/// Single-flight lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionState {
    /// Ready for a question
    #[default]
    Idle,

    /// A question is in flight; `index` is its position in the log
    Pending { index: usize },
}

impl SessionState {
    /// Whether a question is in flight
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn pending_index(self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Pending { index } => Some(index),
        }
    }
}
