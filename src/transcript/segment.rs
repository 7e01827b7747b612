//! Renderable output units

use serde::{Deserialize, Serialize};

/// One classified piece of an entry, ready for a presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum RenderSegment {
    /// Literal text. A trailing `'\n'` marks a line break.
    Plain(String),
    Bold(String),
    /// Strong emphasis with a callout background
    Highlight(String),
    /// One list line, marker removed
    BulletItem(String),
    /// The question part of an entry
    QueryLabel(String),
}

impl RenderSegment {
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text)
            | Self::Bold(text)
            | Self::Highlight(text)
            | Self::BulletItem(text)
            | Self::QueryLabel(text) => text,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Plain(_) => "plain",
            Self::Bold(_) => "bold",
            Self::Highlight(_) => "highlight",
            Self::BulletItem(_) => "bullet_item",
            Self::QueryLabel(_) => "query_label",
        }
    }
}
