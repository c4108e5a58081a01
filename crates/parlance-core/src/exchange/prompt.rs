//! Prompt assembly for the exchange cycle.
//!
//! Projects the persisted transcript into the role-tagged message list a
//! completion provider expects: one fixed system instruction followed by
//! every transcript message in order.

use parlance_types::llm::{Message, MessageRole};
use parlance_types::message::ChatMessage;

/// Fixed system instruction prepended to every completion request.
pub const SYSTEM_PROMPT: &str = "You are a helpful AI assistant in an AI chat application.";

/// Project the transcript into provider messages.
///
/// The system instruction always comes first; transcript order is
/// preserved after it. Ids and timestamps are dropped -- the provider
/// only sees role and content.
pub fn build_prompt(transcript: &[ChatMessage]) -> Vec<Message> {
    let mut messages = Vec::with_capacity(transcript.len() + 1);
    messages.push(Message::new(MessageRole::System, SYSTEM_PROMPT));
    for entry in transcript {
        messages.push(Message {
            role: entry.role.clone(),
            content: entry.content.clone(),
        });
    }
    messages
}
