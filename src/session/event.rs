//! Events that drive the session

use crate::error::ServiceError;
use chrono::{DateTime, Utc};

/// Events that trigger state transitions
///
/// Timestamps travel on the event so the transition stays pure.
#[derive(Debug, Clone)]
pub enum Event {
    // User events
    Submit {
        question: String,
        at: DateTime<Utc>,
    },

    // Answer service events
    AnswerReceived {
        answer: String,
    },
    AnswerFailed {
        error: ServiceError,
    },

    // History provider events
    HistoryLoaded {
        records: Vec<String>,
        at: DateTime<Utc>,
    },
}
