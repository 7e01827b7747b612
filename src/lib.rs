//! Paddock: core of a motorsport Q&A chat client
//!
//! Two halves:
//! - [`transcript`] turns raw `"Query: ...\nResponse: ..."` strings into
//!   styled segments (bold, highlight, bullets) for a renderer.
//! - [`session`] and [`runtime`] keep the ordered transcript log and let at
//!   most one question be in flight at a time.
//!
//! Transport is left to the host, which implements
//! [`runtime::HistoryProvider`] and [`runtime::AnswerService`].

pub mod config;
pub mod entry;
pub mod error;
pub mod runtime;
pub mod session;
pub mod telemetry;
pub mod transcript;
pub mod view;
pub mod wire;

pub use config::SessionConfig;
pub use entry::{EntryContent, Origin, TranscriptEntry};
pub use error::{ServiceError, ServiceErrorKind};
pub use runtime::{AnswerService, ConversationSession, HistoryProvider, SubmitOutcome};
pub use session::{SessionState, SessionUpdate};
pub use transcript::{format, format_entry, RenderSegment};
pub use view::{RenderedEntry, TranscriptView};
