//! Runtime for driving a conversation session
//!
//! Wires the pure state machine to the history provider, the answer service
//! and update subscribers.

mod executor;
pub mod traits;


pub use executor::{ConversationSession, SubmitOutcome};
pub use traits::*;
