//! Conversation session state machine
//!
//! Elm-style: a pure [`transition`] decides, [`SessionCore`] applies the log
//! effects, and the async runtime carries out the rest.

mod effect;
pub mod event;
mod log;
pub mod state;
pub(crate) mod transition;


pub use effect::{Effect, SessionUpdate};
pub use event::Event;
pub use log::TranscriptLog;
pub use state::SessionState;
pub use transition::{transition, TransitionError, TransitionResult};

/// State plus log, mutated only through [`SessionCore::handle`]
#[derive(Debug, Default)]
pub struct SessionCore {
    state: SessionState,
    log: TranscriptLog,
}

impl SessionCore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn log(&self) -> &TranscriptLog {
        &self.log
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    /// Run one event through the state machine.
    ///
    /// Log effects are applied here. The remaining effects
    /// ([`Effect::RequestAnswer`], [`Effect::Notify`]) are returned in order
    /// for the caller to execute.
    ///
    /// # Errors
    ///
    /// The [`TransitionError`] from [`transition`]; state and log are left
    /// untouched.
    pub fn handle(&mut self, event: Event) -> Result<Vec<Effect>, TransitionError> {
        let result = transition(self.state, &self.log, event)?;
        self.state = result.new_state;

        let mut outbound = Vec::new();
        for effect in result.effects {
            match effect {
                Effect::AppendEntry(entry) => {
                    self.log.push(entry);
                }
                Effect::ResolveEntry { index, answer } => {
                    if !self.log.resolve(index, answer) {
                        tracing::error!(index, "Pending entry missing or already resolved");
                    }
                }
                other => outbound.push(other),
            }
        }
        Ok(outbound)
    }
}
