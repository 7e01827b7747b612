//! Session configuration

/// Broadcast capacity used when `PADDOCK_UPDATE_BUFFER` is unset
pub const DEFAULT_UPDATE_BUFFER: usize = 128;

/// Configuration for one conversation session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Correlation id attached to every log line of the session
    pub session_id: String,
    /// Whether `start` pulls prior entries from the history provider
    pub load_history: bool,
    /// Capacity of the update broadcast channel
    pub update_buffer: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            load_history: true,
            update_buffer: DEFAULT_UPDATE_BUFFER,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values fall back to
    /// the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            session_id: lookup("PADDOCK_SESSION_ID")
                .filter(|id| !id.trim().is_empty())
                .unwrap_or(defaults.session_id),
            load_history: lookup("PADDOCK_LOAD_HISTORY")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.load_history),
            update_buffer: lookup("PADDOCK_UPDATE_BUFFER")
                .and_then(|v| v.trim().parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.update_buffer),
        }
    }

    #[must_use]
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    #[must_use]
    pub fn with_load_history(mut self, load_history: bool) -> Self {
        self.load_history = load_history;
        self
    }

    #[must_use]
    pub fn with_update_buffer(mut self, update_buffer: usize) -> Self {
        self.update_buffer = update_buffer.max(1);
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
