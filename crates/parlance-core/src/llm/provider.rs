//! CompletionProvider trait definition.
//!
//! This is the core abstraction over the external completion capability:
//! a role-tagged message list in, a reply in. The relay never streams, so
//! the whole surface is one request/response method.

use parlance_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for completion provider backends (Groq, compatible endpoints).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in parlance-infra (e.g., `GroqProvider`).
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g., "groq").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
