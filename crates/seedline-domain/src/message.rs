//! Outreach and internal-note history

use crate::ids::MessageId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Free-form text (internal notes)
    Text,
    /// Templated outreach macro
    Macro,
}

/// One entry in a creator's append-only message history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message identifier
    pub id: MessageId,
    /// Operator attribution, supplied by the caller
    pub sender: String,
    /// Rendered message body
    pub body: String,
    /// When the entry was appended
    pub sent_at: DateTime<Utc>,
    /// Internal notes are never shown to the creator and never
    /// trigger a status change
    pub is_internal: bool,
    /// Entry kind
    pub kind: MessageKind,
}

impl ChatMessage {
    /// Outbound templated outreach entry
    #[must_use]
    pub fn outreach(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            sender: sender.into(),
            body: body.into(),
            sent_at: Utc::now(),
            is_internal: false,
            kind: MessageKind::Macro,
        }
    }

    /// Internal operator note
    #[must_use]
    pub fn internal_note(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            sender: sender.into(),
            body: body.into(),
            sent_at: Utc::now(),
            is_internal: true,
            kind: MessageKind::Text,
        }
    }
}
