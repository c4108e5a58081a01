//! Exchange coordinator running the user-message/assistant-reply cycle.
//!
//! ExchangeService coordinates between the TranscriptStore and the
//! CompletionProvider to manage one full exchange: validate input, append
//! the user message, request a completion over the whole transcript,
//! append the reply, persist, return the updated transcript.

use parlance_types::config::RelayConfig;
use parlance_types::error::ExchangeError;
use parlance_types::llm::CompletionRequest;
use parlance_types::message::ChatMessage;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::exchange::prompt;
use crate::llm::provider::CompletionProvider;
use crate::transcript::TranscriptStore;

/// Reply substituted when the provider succeeds but returns no content.
pub const EMPTY_REPLY: &str = "No response.";

/// Reply substituted when the provider fails for any reason.
pub const FALLBACK_REPLY: &str = "Sorry, I could not generate a response.";

/// Orchestrates the exchange cycle over the single persisted transcript.
///
/// Generic over `TranscriptStore` and `CompletionProvider` to maintain
/// clean architecture (parlance-core never depends on parlance-infra).
///
/// Every load-complete-save cycle runs under a mutex: concurrent posts
/// serialize instead of overwriting each other's transcript. Reads take
/// no lock.
pub struct ExchangeService<S: TranscriptStore, P: CompletionProvider> {
    store: S,
    provider: P,
    config: RelayConfig,
    cycle: Mutex<()>,
}

impl<S: TranscriptStore, P: CompletionProvider> ExchangeService<S, P> {
    /// Create a new exchange service with the given store and provider.
    pub fn new(store: S, provider: P, config: RelayConfig) -> Self {
        Self {
            store,
            provider,
            config,
            cycle: Mutex::new(()),
        }
    }

    /// Run one full exchange cycle for a user message.
    ///
    /// Provider failures never escape: they are logged and replaced by a
    /// fixed fallback reply, and the exchange still succeeds. A store write
    /// failure aborts the cycle with `ExchangeError::Store`, leaving the
    /// persisted transcript exactly as it was before the call.
    pub async fn handle_user_message(
        &self,
        content: &str,
    ) -> Result<Vec<ChatMessage>, ExchangeError> {
        if content.trim().is_empty() {
            return Err(ExchangeError::EmptyContent);
        }

        let _cycle = self.cycle.lock().await;

        let mut transcript = self.load_or_empty().await;
        transcript.push(ChatMessage::user(content));

        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages: prompt::build_prompt(&transcript),
            max_tokens: self.config.max_reply_tokens,
        };
        let reply = match self.provider.complete(&request).await {
            Ok(response) if !response.content.is_empty() => {
                debug!(
                    id = %response.id,
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    "completion received"
                );
                response.content
            }
            Ok(_) => {
                debug!("provider returned empty content, substituting placeholder");
                EMPTY_REPLY.to_string()
            }
            Err(err) => {
                warn!(
                    provider = self.provider.name(),
                    error = %err,
                    "completion failed, substituting fallback reply"
                );
                FALLBACK_REPLY.to_string()
            }
        };
        transcript.push(ChatMessage::assistant(reply));

        self.store.save(&transcript).await?;
        info!(message_count = transcript.len(), "transcript persisted");
        Ok(transcript)
    }

    /// The full transcript in insertion order. Read-only, no side effects.
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.load_or_empty().await
    }

    /// Clear the persisted transcript and return the now-empty one.
    pub async fn reset(&self) -> Result<Vec<ChatMessage>, ExchangeError> {
        let _cycle = self.cycle.lock().await;
        self.store.reset().await?;
        info!("transcript reset");
        Ok(Vec::new())
    }

    /// Load the transcript, degrading unreadable state to empty.
    ///
    /// Missing persisted state already loads as empty at the store level;
    /// corrupt state is logged here and treated the same so a damaged file
    /// never takes the conversation down.
    async fn load_or_empty(&self) -> Vec<ChatMessage> {
        match self.store.load().await {
            Ok(messages) => messages,
            Err(err) => {
                warn!(error = %err, "failed to load transcript, starting empty");
                Vec::new()
            }
        }
    }
}
