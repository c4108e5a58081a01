//! Transcript message types for Parlance.
//!
//! These types model the single persisted conversation: role-tagged
//! messages with stable identifiers and append-time timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export MessageRole from llm module (it's used in both transcript and llm contexts).
pub use crate::llm::MessageRole;

/// A single message in the persisted transcript.
///
/// Messages are immutable once appended and ordered by insertion, which is
/// also chronological order. The id is a UUIDv7 (time-sortable) suffixed
/// with the role, e.g. `0198c2da-7b11-7c3e-...-user`. Persisted transcripts
/// only ever contain `user` and `assistant` roles; `system` exists solely
/// for prompt assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a message with a fresh id and the current time.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        let id = format!("{}-{role}", Uuid::now_v7());
        Self {
            id,
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}
