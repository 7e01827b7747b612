//! Pure state transition function

use super::{Effect, Event, SessionState, SessionUpdate, TranscriptLog};
use crate::entry::TranscriptEntry;
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: SessionState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: SessionState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }
}

/// Reasons an event is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("A question is already in flight")]
    Busy,
    #[error("Question is empty")]
    EmptyQuestion,
    #[error("No question is in flight")]
    NotPending,
}

/// Pure transition function
///
/// Given the same state, log and event it always produces the same result
/// and performs no I/O. The log is read only to learn where an appended
/// entry will land.
///
/// # Errors
///
/// Rejects blank questions, a submission while one is pending, and answer
/// events with nothing in flight.
pub fn transition(
    state: SessionState,
    log: &TranscriptLog,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        // Idle + Submit -> Pending
        (SessionState::Idle, Event::Submit { question, .. }) if question.trim().is_empty() => {
            Err(TransitionError::EmptyQuestion)
        }
        (SessionState::Idle, Event::Submit { question, at }) => {
            let index = log.len();
            Ok(TransitionResult::new(SessionState::Pending { index })
                .with_effect(Effect::append(TranscriptEntry::local(question.clone(), at)))
                .with_effect(Effect::RequestAnswer { question })
                .with_effect(Effect::notify_appended(index))
                .with_effect(Effect::notify_busy(true)))
        }

        // Second submission while one is in flight is dropped, not queued
        (SessionState::Pending { .. }, Event::Submit { .. }) => Err(TransitionError::Busy),

        // Pending + AnswerReceived -> Idle
        (SessionState::Pending { index }, Event::AnswerReceived { answer }) => {
            Ok(TransitionResult::new(SessionState::Idle)
                .with_effect(Effect::ResolveEntry {
                    index,
                    answer,
                })
                .with_effect(Effect::notify_resolved(index))
                .with_effect(Effect::notify_busy(false)))
        }

        // Pending + AnswerFailed -> Idle, entry keeps no answer
        (SessionState::Pending { index }, Event::AnswerFailed { error }) => {
            Ok(TransitionResult::new(SessionState::Idle)
                .with_effect(Effect::Notify(SessionUpdate::RequestFailed {
                    index,
                    message: error.message,
                }))
                .with_effect(Effect::notify_busy(false)))
        }

        (SessionState::Idle, Event::AnswerReceived { .. } | Event::AnswerFailed { .. }) => {
            Err(TransitionError::NotPending)
        }

        // History is appended behind whatever is already there, in any state
        (state, Event::HistoryLoaded { records, at }) => {
            let count = records.len();
            let appends = records
                .iter()
                .map(|raw| Effect::append(TranscriptEntry::from_record(raw, at)));
            Ok(TransitionResult::new(state)
                .with_effects(appends)
                .with_effect(Effect::Notify(SessionUpdate::HistoryLoaded { count })))
        }
    }
}
