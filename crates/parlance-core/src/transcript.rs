//! TranscriptStore trait definition.
//!
//! Provides durable load/save/reset over the single persisted transcript.

use parlance_types::error::StoreError;
use parlance_types::message::ChatMessage;

/// Store trait for transcript persistence.
///
/// Implementations live in parlance-infra (e.g., `JsonTranscriptStore`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait TranscriptStore: Send + Sync {
    /// Load the full transcript in insertion order.
    ///
    /// A store that has never been written to is a normal empty transcript,
    /// not an error. Unreadable or malformed persisted state is an `Err`;
    /// deciding whether to recover from that belongs to the caller.
    fn load(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, StoreError>> + Send;

    /// Replace the entire persisted transcript.
    fn save(
        &self,
        messages: &[ChatMessage],
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Clear the persisted transcript.
    ///
    /// Equivalent to saving an empty transcript.
    fn reset(&self) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}
