//! Conversation session executor

use super::traits::{AnswerService, HistoryProvider};
use crate::config::SessionConfig;
use crate::entry::TranscriptEntry;
use crate::error::ServiceError;
use crate::session::{Effect, Event, SessionCore, SessionUpdate, TransitionError};
use crate::view::TranscriptView;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};

/// What became of one `submit` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The answer was attached to the entry at `index`
    Answered { index: usize },
    /// The service failed; the entry at `index` has no answer
    Failed { index: usize, error: ServiceError },
    /// Dropped before any entry or request was made
    Rejected(TransitionError),
}

/// Reason fed to the core when a submission is dropped mid-flight
const ABANDONED: &str = "request abandoned";

/// Async driver around [`SessionCore`].
///
/// The core sits behind one mutex that is never held across a collaborator
/// call, so a second `submit` arriving while the first awaits its answer sees
/// the pending state and is dropped.
pub struct ConversationSession<H, A>
where
    H: HistoryProvider,
    A: AnswerService,
{
    config: SessionConfig,
    history: H,
    answers: A,
    core: Arc<Mutex<SessionCore>>,
    history_requested: AtomicBool,
    updates: broadcast::Sender<SessionUpdate>,
}

impl<H, A> ConversationSession<H, A>
where
    H: HistoryProvider,
    A: AnswerService,
{
    pub fn new(config: SessionConfig, history: H, answers: A) -> Self {
        let (updates, _) = broadcast::channel(config.update_buffer.max(1));
        Self {
            config,
            history,
            answers,
            core: Arc::new(Mutex::new(SessionCore::new())),
            history_requested: AtomicBool::new(false),
            updates,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.config.session_id
    }

    /// Receive change notifications from now on
    pub fn subscribe(&self) -> broadcast::Receiver<SessionUpdate> {
        self.updates.subscribe()
    }

    /// Session startup: loads history if configured to.
    /// Returns the number of entries loaded.
    pub async fn start(&self) -> usize {
        tracing::info!(session_id = %self.config.session_id, "Starting conversation session");
        if self.config.load_history {
            self.load_history().await
        } else {
            0
        }
    }

    /// Pull prior records from the history provider and append them.
    ///
    /// Only the first call reaches the provider. A provider failure is
    /// logged and leaves the log as it was.
    pub async fn load_history(&self) -> usize {
        if self.history_requested.swap(true, Ordering::SeqCst) {
            tracing::debug!(session_id = %self.config.session_id, "History already requested");
            return 0;
        }

        let records = match self.history.fetch().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    session_id = %self.config.session_id,
                    error = %e,
                    kind = e.kind.as_str(),
                    "Failed to load chat history"
                );
                return 0;
            }
        };

        let count = records.len();
        let mut core = self.core.lock().await;
        match core.handle(Event::HistoryLoaded {
            records,
            at: Utc::now(),
        }) {
            Ok(effects) => {
                dispatch(&self.updates, effects);
                tracing::info!(session_id = %self.config.session_id, count, "Loaded chat history");
                count
            }
            Err(e) => {
                tracing::error!(session_id = %self.config.session_id, error = %e, "History rejected");
                0
            }
        }
    }

    /// Ask a question.
    ///
    /// Blank questions and questions submitted while another is in flight are
    /// dropped without touching the log. Otherwise the answer service is
    /// called exactly once and the outcome merged into the new entry.
    ///
    /// Dropping the returned future before it completes releases the pending
    /// question as a failure, so the session does not stay busy.
    pub async fn submit(&self, question: impl Into<String>) -> SubmitOutcome {
        let (guard, question) = match self.begin(question.into()).await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::debug!(session_id = %self.config.session_id, reason = %e, "Submission dropped");
                return SubmitOutcome::Rejected(e);
            }
        };

        tracing::info!(session_id = %self.config.session_id, index = guard.index, "Question submitted");
        let result = self.answers.ask(&question).await;
        self.finish(guard, result).await
    }

    /// Admit a submission. Returns the armed guard for the pending entry and
    /// the question to send.
    async fn begin(&self, question: String) -> Result<(PendingGuard, String), TransitionError> {
        let mut core = self.core.lock().await;
        let effects = core.handle(Event::Submit {
            question,
            at: Utc::now(),
        })?;

        let Some((index, question)) = admit(&mut core, &self.updates, effects) else {
            tracing::error!(session_id = %self.config.session_id, "Accepted submission produced no request");
            return Err(TransitionError::NotPending);
        };

        let guard = PendingGuard {
            core: Arc::clone(&self.core),
            updates: self.updates.clone(),
            session_id: self.config.session_id.clone(),
            index,
            armed: true,
        };
        Ok((guard, question))
    }

    async fn finish(
        &self,
        mut guard: PendingGuard,
        result: Result<String, ServiceError>,
    ) -> SubmitOutcome {
        let index = guard.index;
        let mut core = self.core.lock().await;
        guard.armed = false;

        let (event, outcome) = match result {
            Ok(answer) => (
                Event::AnswerReceived { answer },
                SubmitOutcome::Answered { index },
            ),
            Err(error) => {
                tracing::warn!(
                    session_id = %self.config.session_id,
                    index,
                    error = %error,
                    kind = error.kind.as_str(),
                    "Answer service failed, entry left unanswered"
                );
                (
                    Event::AnswerFailed {
                        error: error.clone(),
                    },
                    SubmitOutcome::Failed { index, error },
                )
            }
        };

        match core.handle(event) {
            Ok(effects) => {
                dispatch(&self.updates, effects);
                outcome
            }
            Err(e) => {
                tracing::error!(session_id = %self.config.session_id, index, error = %e, "Answer arrived with no question in flight");
                SubmitOutcome::Failed {
                    index,
                    error: ServiceError::unknown(e.to_string()),
                }
            }
        }
    }

    pub async fn is_busy(&self) -> bool {
        self.core.lock().await.is_busy()
    }

    /// Snapshot of the log
    pub async fn entries(&self) -> Vec<TranscriptEntry> {
        self.core.lock().await.log().entries().to_vec()
    }

    /// Formatted snapshot for rendering
    pub async fn view(&self) -> TranscriptView {
        let core = self.core.lock().await;
        TranscriptView::build(core.log(), core.state())
    }
}

/// Execute outbound effects after the log effects were applied
fn dispatch(updates: &broadcast::Sender<SessionUpdate>, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::Notify(update) => {
                // No receivers is fine
                let _ = updates.send(update);
            }
            Effect::RequestAnswer { .. } => {
                tracing::error!("Answer request reached the dispatcher");
            }
            Effect::AppendEntry(_) | Effect::ResolveEntry { .. } => {
                tracing::error!("Log effect reached the dispatcher");
            }
        }
    }
}

/// Announce an accepted submission and pull out its request. Without a
/// request the pending question is released at once.
pub(super) fn admit(
    core: &mut SessionCore,
    updates: &broadcast::Sender<SessionUpdate>,
    effects: Vec<Effect>,
) -> Option<(usize, String)> {
    let mut request = None;
    let mut notifications = Vec::new();
    for effect in effects {
        match effect {
            Effect::RequestAnswer { question } => request = Some(question),
            other => notifications.push(other),
        }
    }
    dispatch(updates, notifications);

    let index = core.state().pending_index()?;
    if request.is_none() {
        release_pending(core, updates, index, "submission produced no request");
    }
    request.map(|question| (index, question))
}

/// Fail the question at `index` if it is still the pending one
fn release_pending(
    core: &mut SessionCore,
    updates: &broadcast::Sender<SessionUpdate>,
    index: usize,
    reason: &str,
) {
    if core.state().pending_index() != Some(index) {
        return;
    }
    match core.handle(Event::AnswerFailed {
        error: ServiceError::unknown(reason),
    }) {
        Ok(effects) => dispatch(updates, effects),
        Err(e) => tracing::error!(index, error = %e, "Could not release pending question"),
    }
}

/// Keeps the session from staying busy when a `submit` future is dropped
/// between admission and `finish`.
///
/// On drop while armed the pending question is failed in place: directly if
/// the core is free, otherwise from a task on the current runtime.
pub(super) struct PendingGuard {
    core: Arc<Mutex<SessionCore>>,
    updates: broadcast::Sender<SessionUpdate>,
    session_id: String,
    index: usize,
    armed: bool,
}

impl PendingGuard {
    #[cfg(test)]
    pub(super) fn armed(
        core: Arc<Mutex<SessionCore>>,
        updates: broadcast::Sender<SessionUpdate>,
        index: usize,
    ) -> Self {
        Self {
            core,
            updates,
            session_id: "test-session".to_string(),
            index,
            armed: true,
        }
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        tracing::warn!(session_id = %self.session_id, index = self.index, "Submission dropped before its answer arrived");

        if let Ok(mut core) = self.core.try_lock() {
            release_pending(&mut core, &self.updates, self.index, ABANDONED);
            return;
        }

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let core = Arc::clone(&self.core);
                let updates = self.updates.clone();
                let index = self.index;
                handle.spawn(async move {
                    let mut core = core.lock().await;
                    release_pending(&mut core, &updates, index, ABANDONED);
                });
            }
            Err(_) => {
                tracing::error!(session_id = %self.session_id, index = self.index, "No runtime to release the pending question");
            }
        }
    }
}
